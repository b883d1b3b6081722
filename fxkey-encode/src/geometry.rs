//! The geometry instruction grammar.
//!
//! A geometry instruction describes one operation over one or two geometric objects. Each
//! object (group A, and group B unless the operation is unary) contributes a shape code and a
//! block of already-encoded parameter values; the operation contributes an operation code and
//! per-group T-codes. The literal separators `C`, `R` and `=` and the trailing `=` after every
//! value block are fixed protocol and must be reproduced exactly:
//!
//! - unary:  `prefix codeA valuesA C opCode tcodeA =`
//! - binary: `prefix codeA valuesA C codeB valuesB C opCode tcodeA R tcodeB =`

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A geometric object kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Point,
    Line,
    Plane,
    Circle,
    Sphere,
}

/// The dimensionality of the surrounding space. Only points encode differently between the
/// two; every other shape is fixed-arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    Two,
    Three,
}

/// A supported geometric operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    Intersection,
    Distance,
    Area,
    Volume,
    LineEquation,
}

/// Which operand slot a shape occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperandGroup {
    A,
    B,
}

impl Shape {
    /// The number of parameter values this shape encodes.
    pub fn parameter_count(&self, dimension: Dimension) -> usize {
        match self {
            Shape::Point => match dimension {
                Dimension::Two => 2,
                Dimension::Three => 3,
            },
            // a point and a direction vector
            Shape::Line => 6,
            Shape::Plane => 4,
            // center plus radius
            Shape::Circle => 3,
            Shape::Sphere => 4,
        }
    }
}

impl Operation {
    /// Whether the operation takes a single operand, in which case group B is omitted from the
    /// instruction entirely.
    pub fn is_unary(&self) -> bool {
        matches!(self, Operation::Area | Operation::Volume)
    }

    /// The shapes this operation accepts as operands. Callers use this to constrain shape
    /// selection before assembling anything.
    pub fn allowed_shapes(&self) -> &'static [Shape] {
        match self {
            Operation::Intersection => &[
                Shape::Point,
                Shape::Line,
                Shape::Plane,
                Shape::Circle,
                Shape::Sphere,
            ],
            Operation::Distance => &[Shape::Point, Shape::Line, Shape::Plane],
            Operation::Area => &[Shape::Circle, Shape::Sphere],
            Operation::Volume => &[Shape::Sphere],
            Operation::LineEquation => &[Shape::Point],
        }
    }
}

/// The code tables driving geometry assembly.
///
/// [`GeometryTables::default`] carries the standard calculator codes; callers with their own
/// parsed configuration can build a table by hand. Lookups that miss fall back to the
/// protocol's explicit unknown codes (`00`, `qT00T12`, `T0`) rather than failing, matching the
/// tolerant behavior of the encoding as deployed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryTables {
    pub shape_codes_a: HashMap<(Shape, Dimension), String>,
    pub shape_codes_b: HashMap<(Shape, Dimension), String>,
    pub operation_codes: HashMap<Operation, String>,
    pub default_tcodes: HashMap<(OperandGroup, Shape), String>,
    pub operation_tcodes: HashMap<(Operation, OperandGroup, Shape), String>,
}

/// The standard tables.
static DEFAULT_TABLES: Lazy<GeometryTables> = Lazy::new(GeometryTables::default);

impl GeometryTables {
    /// The standard tables, built once.
    pub fn standard() -> &'static Self {
        &DEFAULT_TABLES
    }

    /// The shape code for the given operand slot.
    pub fn shape_code(&self, group: OperandGroup, shape: Shape, dimension: Dimension) -> &str {
        let table = match group {
            OperandGroup::A => &self.shape_codes_a,
            OperandGroup::B => &self.shape_codes_b,
        };
        table
            .get(&(shape, dimension))
            .map(String::as_str)
            .unwrap_or(match group {
                OperandGroup::A => "00",
                OperandGroup::B => "qT00T12",
            })
    }

    /// The operation code.
    pub fn operation_code(&self, operation: Operation) -> &str {
        self.operation_codes
            .get(&operation)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The T-code for a shape in an operand slot: the operation-specific override if one
    /// exists, the per-group default otherwise.
    pub fn tcode(&self, operation: Operation, group: OperandGroup, shape: Shape) -> &str {
        self.operation_tcodes
            .get(&(operation, group, shape))
            .or_else(|| self.default_tcodes.get(&(group, shape)))
            .map(String::as_str)
            .unwrap_or("T0")
    }
}

impl Default for GeometryTables {
    fn default() -> Self {
        use Dimension::{Three, Two};
        use OperandGroup::{A, B};

        let mut shape_codes_a = HashMap::new();
        let mut shape_codes_b = HashMap::new();
        for (shape, code_a, code_b) in [
            (Shape::Line, "21", "qT12T12"),
            (Shape::Plane, "31", "qT13T12"),
            (Shape::Circle, "41", "qT14T12"),
            (Shape::Sphere, "51", "qT15T12"),
        ] {
            for dimension in [Two, Three] {
                shape_codes_a.insert((shape, dimension), code_a.to_string());
                shape_codes_b.insert((shape, dimension), code_b.to_string());
            }
        }
        shape_codes_a.insert((Shape::Point, Two), "112".to_string());
        shape_codes_a.insert((Shape::Point, Three), "113".to_string());
        shape_codes_b.insert((Shape::Point, Two), "qT11T122".to_string());
        shape_codes_b.insert((Shape::Point, Three), "qT11T123".to_string());

        let operation_codes = [
            (Operation::Intersection, "qT2"),
            (Operation::Distance, "qT3"),
            (Operation::Area, "qT4"),
            (Operation::Volume, "qT5"),
            (Operation::LineEquation, "qT6"),
        ]
        .into_iter()
        .map(|(op, code)| (op, code.to_string()))
        .collect();

        let default_tcodes = [
            ((A, Shape::Point), "T1"),
            ((A, Shape::Line), "T4"),
            ((A, Shape::Plane), "T7"),
            ((A, Shape::Circle), "Tz"),
            ((A, Shape::Sphere), "Tj"),
            ((B, Shape::Point), "T2"),
            ((B, Shape::Line), "T5"),
            ((B, Shape::Plane), "T8"),
            ((B, Shape::Circle), "Tx"),
            ((B, Shape::Sphere), "Tk"),
        ]
        .into_iter()
        .map(|(key, code)| (key, code.to_string()))
        .collect();

        let operation_tcodes = [
            ((Operation::Area, A, Shape::Circle), "T1"),
            ((Operation::Area, A, Shape::Sphere), "T4"),
            ((Operation::Area, B, Shape::Circle), "T2"),
            ((Operation::Area, B, Shape::Sphere), "T5"),
            ((Operation::Volume, A, Shape::Sphere), "T7"),
            ((Operation::Volume, B, Shape::Sphere), "T8"),
        ]
        .into_iter()
        .map(|(key, code)| (key, code.to_string()))
        .collect();

        Self {
            shape_codes_a,
            shape_codes_b,
            operation_codes,
            default_tcodes,
            operation_tcodes,
        }
    }
}

/// One operand of a geometry instruction: its shape, the space it lives in, and its
/// already-encoded parameter tokens in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    pub shape: Shape,
    pub dimension: Dimension,
    pub values: Vec<String>,
}

impl GroupSpec {
    pub fn new(shape: Shape, dimension: Dimension, values: Vec<String>) -> Self {
        Self { shape, dimension, values }
    }

    /// The operand's value block: parameter tokens joined by `=` with one trailing `=`,
    /// padded with empty tokens (or truncated) to the shape's parameter count.
    fn value_block(&self) -> String {
        let count = self.shape.parameter_count(self.dimension);
        let mut block = String::new();
        for i in 0..count {
            if let Some(value) = self.values.get(i) {
                block.push_str(value);
            }
            block.push('=');
        }
        block
    }
}

/// Splits one raw comma-separated cell into exactly `count` raw parameter tokens: whitespace
/// stripped, missing entries filled with `"0"`, excess entries dropped, order preserved. An
/// entirely empty cell yields `count` empty tokens instead of zeros.
pub fn split_values(raw: &str, count: usize) -> Vec<String> {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return vec![String::new(); count];
    }

    let mut values: Vec<String> = stripped.split(',').map(str::to_string).collect();
    values.resize(count, "0".to_string());
    values
}

/// Assembles one geometry instruction.
///
/// Unary operations (area, volume) ignore `group_b` entirely. A binary operation with no
/// group B degrades to the unknown group-B code with an empty value block rather than
/// failing; assembly never errors.
pub fn assemble_geometry_instruction(
    tables: &GeometryTables,
    prefix: &str,
    operation: Operation,
    group_a: &GroupSpec,
    group_b: Option<&GroupSpec>,
) -> String {
    let code_a = tables.shape_code(OperandGroup::A, group_a.shape, group_a.dimension);
    let values_a = group_a.value_block();
    let op_code = tables.operation_code(operation);
    let tcode_a = tables.tcode(operation, OperandGroup::A, group_a.shape);

    if operation.is_unary() {
        return format!("{prefix}{code_a}{values_a}C{op_code}{tcode_a}=");
    }

    let (code_b, values_b, tcode_b) = match group_b {
        Some(group) => (
            tables.shape_code(OperandGroup::B, group.shape, group.dimension),
            group.value_block(),
            tables.tcode(operation, OperandGroup::B, group.shape),
        ),
        None => {
            tracing::debug!(?operation, "binary geometry operation assembled without group B");
            ("qT00T12", String::new(), "T0")
        },
    };

    format!("{prefix}{code_a}{values_a}C{code_b}{values_b}C{op_code}{tcode_a}R{tcode_b}=")
}
