use crate::markup;
use crate::types::{FieldType, Filter, Operator};

impl Filter {
    /// Builds a filter comparing a non-temporal field against a value.
    ///
    /// `field_value` is inserted verbatim, empty strings included.
    pub fn scalar(
        field_name: &str,
        field_type: FieldType,
        field_value: &str,
        op: Operator,
    ) -> Filter {
        let field_ref = markup::field_ref(field_name);
        let value = markup::value(field_type.label(), field_value);
        Filter {
            markup: markup::binary(op, &field_ref, &value),
        }
    }

    /// Builds an `IsNull` (or, with `is_null = false`, `IsNotNull`) check on
    /// a field. No value element is involved.
    pub fn presence(field_name: &str, is_null: bool) -> Filter {
        let tag = if is_null {
            markup::IS_NULL
        } else {
            markup::IS_NOT_NULL
        };
        Filter {
            markup: markup::unary(tag, &markup::field_ref(field_name)),
        }
    }
}
