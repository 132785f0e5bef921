use crate::types::Operator;

pub(crate) const IS_NULL: &str = "IsNull";
pub(crate) const IS_NOT_NULL: &str = "IsNotNull";

pub(crate) fn wrapper_tag(op: Operator) -> &'static str {
    match op {
        Operator::Equal => "Eq",
        Operator::NotEqual => "Neq",
        Operator::GreaterThan => "Gt",
        Operator::GreaterThanOrEqual => "Geq",
        Operator::LowerThan => "Lt",
        Operator::LowerThanOrEqual => "Leq",
        Operator::BeginsWith => "BeginsWith",
        Operator::Contains => "Contains",
        Operator::DateRangesOverlap => "DateRangesOverlap",
    }
}

pub(crate) fn binary(op: Operator, field_ref: &str, value: &str) -> String {
    let tag = wrapper_tag(op);
    format!("<{}>{}{}</{}>", tag, field_ref, value, tag)
}

pub(crate) fn unary(tag: &str, field_ref: &str) -> String {
    format!("<{}>{}</{}>", tag, field_ref, tag)
}

pub(crate) fn field_ref(name: &str) -> String {
    format!(r#"<FieldRef Name="{}" />"#, name)
}

pub(crate) fn value(type_label: &str, text: &str) -> String {
    format!(r#"<Value Type="{}">{}</Value>"#, type_label, text)
}

pub(crate) fn date_time_value(include_time_value: bool, text: &str) -> String {
    format!(
        r#"<Value IncludeTimeValue="{}" Type="DateTime">{}</Value>"#,
        include_time_value, text
    )
}
