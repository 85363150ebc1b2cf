//! Built-in scalar types and their TypeScript mappings.
//!
//! | Schema scalar | TypeScript | class-validator |
//! |---------------|------------|-----------------|
//! | `String`      | `string`   | `IsString`      |
//! | `Int`         | `number`   | `IsNumber`      |
//! | `BigInt`      | `bigint`   | -               |
//! | `Boolean`     | `boolean`  | `IsBoolean`     |
//! | `DateTime`    | `Date`     | `IsDateString`  |
//! | `Decimal`     | `Decimal`  | `IsNumber`      |
//! | `Json`        | `any`      | -               |
//!
//! Every other type name (relations, enums, unlisted scalars) maps to `any`.

use serde::Serialize;

/// TypeScript type used for any name outside the scalar table.
pub const FALLBACK_TS_TYPE: &str = "any";

/// The closed set of built-in scalar type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScalarType {
    String,
    Int,
    Boolean,
    DateTime,
    Decimal,
    BigInt,
    Json,
}

impl ScalarType {
    /// All built-in scalars, in table order.
    pub const ALL: [ScalarType; 7] = [
        ScalarType::String,
        ScalarType::Int,
        ScalarType::Boolean,
        ScalarType::DateTime,
        ScalarType::Decimal,
        ScalarType::BigInt,
        ScalarType::Json,
    ];

    /// Look up a scalar by its schema name (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    /// The schema spelling of this scalar.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "String",
            ScalarType::Int => "Int",
            ScalarType::Boolean => "Boolean",
            ScalarType::DateTime => "DateTime",
            ScalarType::Decimal => "Decimal",
            ScalarType::BigInt => "BigInt",
            ScalarType::Json => "Json",
        }
    }

    /// The TypeScript type emitted for this scalar.
    pub fn ts_type(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Int => "number",
            ScalarType::BigInt => "bigint",
            ScalarType::Boolean => "boolean",
            ScalarType::DateTime => "Date",
            ScalarType::Decimal => "Decimal",
            ScalarType::Json => "any",
        }
    }

    /// The validation decorator applied to DTO fields of this scalar.
    pub fn validator(&self) -> Option<Validator> {
        match self {
            ScalarType::String => Some(Validator::IsString),
            ScalarType::Int | ScalarType::Decimal => Some(Validator::IsNumber),
            ScalarType::Boolean => Some(Validator::IsBoolean),
            ScalarType::DateTime => Some(Validator::IsDateString),
            ScalarType::BigInt | ScalarType::Json => None,
        }
    }
}

/// Map a schema type name to its TypeScript type.
pub fn ts_type_for(type_name: &str) -> &'static str {
    ScalarType::from_name(type_name).map_or(FALLBACK_TS_TYPE, |s| s.ts_type())
}

/// Type-specific class-validator decorators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validator {
    IsString,
    IsNumber,
    IsBoolean,
    IsDateString,
}

impl Validator {
    /// All validators, in import order.
    pub const ALL: [Validator; 4] = [
        Validator::IsString,
        Validator::IsNumber,
        Validator::IsBoolean,
        Validator::IsDateString,
    ];

    /// Decorator name as imported from `class-validator`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Validator::IsString => "IsString",
            Validator::IsNumber => "IsNumber",
            Validator::IsBoolean => "IsBoolean",
            Validator::IsDateString => "IsDateString",
        }
    }
}
