/// Display granularity for a single date/time field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    Numeric,
    TwoDigit,
    Short,
}

/// Immutable selection of fields to render, fixed at compile time.
/// A `None` field is omitted from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub month: Option<FieldStyle>,
    pub day: Option<FieldStyle>,
    pub hour: Option<FieldStyle>,
    pub minute: Option<FieldStyle>,
}

/// Abbreviated date plus clock time, e.g. "Jan 5, 2:30 PM".
pub const DATE_TIME: FormatOptions = FormatOptions {
    month: Some(FieldStyle::Short),
    day: Some(FieldStyle::Numeric),
    hour: Some(FieldStyle::Numeric),
    minute: Some(FieldStyle::Numeric),
};

/// Clock time only, e.g. "2:30 PM".
pub const TIME_ONLY: FormatOptions = FormatOptions {
    month: None,
    day: None,
    hour: Some(FieldStyle::Numeric),
    minute: Some(FieldStyle::Numeric),
};
