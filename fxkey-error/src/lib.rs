//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, along with the [`error_kind!`] macro used to declare new error kinds.

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, highlighting the offending regions of the given source
    /// string.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so its
    /// `eprint` method is the only way to write it out.
    ///
    /// [`Report`]: https://docs.rs/ariadne/latest/ariadne/struct.Report.html
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> std::io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

/// Declares a struct implementing [`ErrorKind`].
///
/// The struct's fields are destructured before the `message`, `labels`, and `help` expressions
/// are evaluated, so the expressions can refer to the fields by name. Each label is matched
/// positionally with one of the spans attached to the [`Error`]; an empty label string produces
/// an unlabeled highlight.
#[macro_export]
macro_rules! error_kind {
    (
        $(#[$attr:meta])*
        $name:ident {
            $( $(#[$field_attr:meta])* $field:ident: $ty:ty ),* $(,)?
        },
        message = $message:expr,
        labels = $labels:expr
        $(, help = $help:expr)? $(,)?
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $( $(#[$field_attr])* pub $field: $ty, )*
        }

        impl $crate::ErrorKind for $name {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> ::ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                let $name { $($field),* } = self;

                #[allow(unused_mut)]
                let mut builder = ::ariadne::Report::build(
                    ::ariadne::ReportKind::Error,
                    src_id,
                    spans.first().map_or(0, |span| span.start),
                )
                    .with_message($message)
                    .with_labels(
                        $labels
                            .into_iter()
                            .enumerate()
                            .map(|(i, label_str)| {
                                let span = spans.get(i).cloned().unwrap_or(0..0);
                                let mut label = ::ariadne::Label::new((src_id, span))
                                    .with_color($crate::EXPR);

                                if !label_str.is_empty() {
                                    label = label.with_message(label_str);
                                }

                                label
                            })
                            .collect::<::std::vec::Vec<_>>(),
                    );

                $( builder.set_help($help); )?
                builder.finish()
            }
        }
    };
    (
        $(#[$attr:meta])*
        $name:ident,
        message = $message:expr,
        labels = $labels:expr
        $(, help = $help:expr)? $(,)?
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name;

        impl $crate::ErrorKind for $name {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> ::ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                #[allow(unused_mut)]
                let mut builder = ::ariadne::Report::build(
                    ::ariadne::ReportKind::Error,
                    src_id,
                    spans.first().map_or(0, |span| span.start),
                )
                    .with_message($message)
                    .with_labels(
                        $labels
                            .into_iter()
                            .enumerate()
                            .map(|(i, label_str)| {
                                let span = spans.get(i).cloned().unwrap_or(0..0);
                                let mut label = ::ariadne::Label::new((src_id, span))
                                    .with_color($crate::EXPR);

                                if !label_str.is_empty() {
                                    label = label.with_message(label_str);
                                }

                                label
                            })
                            .collect::<::std::vec::Vec<_>>(),
                    );

                $( builder.set_help($help); )?
                builder.finish()
            }
        }
    };
}
