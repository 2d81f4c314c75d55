use chrono::NaiveDateTime;
use rand::RngCore;

use flatgen_core::{ControlFlags, FileFormat, LoadType, RecordKind};

use crate::errors::GenerationError;
use crate::policy::{FieldSpec, Presence, Source};
use crate::provider::ValueProvider;
use crate::value::FieldValue;

/// Ordered field table of one record kind.
pub type FieldTable = Vec<&'static FieldSpec>;

/// Flatten table segments into one ordered field table.
pub fn field_table(segments: &[&'static [FieldSpec]]) -> FieldTable {
    segments
        .iter()
        .copied()
        .flat_map(|segment| segment.iter())
        .collect()
}

/// Named, ordered field to values table for one record kind.
///
/// Rows are written once while the file is assembled and only read after.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    kind: RecordKind,
    fields: FieldTable,
    rows: Vec<Vec<FieldValue>>,
    parents: Vec<Option<usize>>,
    sequence_column: Option<usize>,
}

impl RecordSchema {
    pub fn new(kind: RecordKind, fields: FieldTable) -> Self {
        let sequence_column = fields
            .iter()
            .position(|field| matches!(field.source, Source::RecordNumber));
        Self {
            kind,
            fields,
            rows: Vec::new(),
            parents: Vec::new(),
            sequence_column,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn fields(&self) -> &[&'static FieldSpec] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Column holding the record number, filled in at write time.
    pub fn sequence_column(&self) -> Option<usize> {
        self.sequence_column
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[FieldValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[FieldValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Index of the parent row that owns `index`, if any.
    pub fn parent_of(&self, index: usize) -> Option<usize> {
        self.parents.get(index).copied().flatten()
    }

    pub fn value(&self, row: usize, name: &str) -> Option<&FieldValue> {
        let column = self.position(name)?;
        self.rows.get(row).and_then(|values| values.get(column))
    }

    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a FieldValue> + 'a> {
        let column = self.position(name)?;
        Some(self.rows.iter().filter_map(move |values| values.get(column)))
    }

    pub fn view(&self, index: usize) -> Option<RowView<'_>> {
        self.row(index).map(|values| RowView::new(&self.fields, values))
    }

    pub(crate) fn push_row(&mut self, values: Vec<FieldValue>, parent: Option<usize>) {
        self.rows.push(values);
        self.parents.push(parent);
    }
}

/// Read access to a (possibly partially computed) row by field name.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    fields: &'a [&'static FieldSpec],
    values: &'a [FieldValue],
}

impl<'a> RowView<'a> {
    pub fn new(fields: &'a [&'static FieldSpec], values: &'a [FieldValue]) -> Self {
        Self { fields, values }
    }

    /// Value of `name`, if that field has already been computed.
    pub fn get(&self, name: &str) -> Option<&'a FieldValue> {
        let values = self.values;
        self.fields
            .iter()
            .take(values.len())
            .position(|field| field.name == name)
            .and_then(|index| values.get(index))
    }
}

/// Owning parent row handed to child and status rows.
#[derive(Debug, Clone, Copy)]
pub struct ParentRow<'a> {
    pub kind: RecordKind,
    pub row: RowView<'a>,
}

/// Everything a field may read besides the provider.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub format: FileFormat,
    pub flags: &'a ControlFlags,
    pub generated_at: NaiveDateTime,
    pub payer_id: &'a str,
    pub header: Option<RowView<'a>>,
    pub parent: Option<ParentRow<'a>>,
    pub row_index: usize,
    pub body_count: u64,
}

/// Compute one row by evaluating every field in table order.
pub fn compute_row<R: RngCore>(
    fields: &[&'static FieldSpec],
    ctx: &RowContext<'_>,
    provider: &mut ValueProvider<R>,
) -> Result<Vec<FieldValue>, GenerationError> {
    let mut values = Vec::with_capacity(fields.len());
    for field in fields {
        let value = {
            let current = RowView::new(fields, &values);
            let source = if holds(&field.presence, ctx, &current, field.name)? {
                &field.source
            } else {
                &field.otherwise
            };
            draw(source, ctx, &current, provider, field.name)?
        };
        values.push(value);
    }
    Ok(values)
}

fn holds(
    presence: &Presence,
    ctx: &RowContext<'_>,
    current: &RowView<'_>,
    field: &str,
) -> Result<bool, GenerationError> {
    let outcome = match presence {
        Presence::Always => true,
        Presence::OptionalFields => ctx.flags.optional_fields,
        Presence::ValidationCodeIn(codes) => ctx.flags.validation_code_in(codes),
        Presence::FullLoad => ctx.flags.load_type == LoadType::Full,
        Presence::HeaderEquals(name, expected) => {
            let header = ctx.header.ok_or_else(|| {
                GenerationError::InvalidLayout(format!("field '{field}' reads header before it exists"))
            })?;
            lookup(&header, name, field, "header")?.matches(expected)
        }
        Presence::FieldEquals(name, expected) => {
            lookup(current, name, field, "sibling")?.matches(expected)
        }
        Presence::FieldNotIn(name, excluded) => {
            let value = lookup(current, name, field, "sibling")?.as_text();
            !excluded.iter().any(|candidate| *candidate == value.as_ref())
        }
        Presence::ParentIs(kind) => ctx.parent.is_some_and(|parent| parent.kind == *kind),
        Presence::All(parts) => {
            for part in parts.iter() {
                if !holds(part, ctx, current, field)? {
                    return Ok(false);
                }
            }
            true
        }
    };
    Ok(outcome)
}

fn draw<R: RngCore>(
    source: &Source,
    ctx: &RowContext<'_>,
    current: &RowView<'_>,
    provider: &mut ValueProvider<R>,
    field: &str,
) -> Result<FieldValue, GenerationError> {
    let value = match source {
        Source::Empty | Source::RecordNumber => FieldValue::Empty,
        Source::Literal(value) => FieldValue::text(*value),
        Source::PayerId => FieldValue::text(ctx.payer_id),
        Source::Alphanumeric(len) => FieldValue::Text(provider.alphanumeric(*len)),
        Source::Digits(len) => FieldValue::Text(provider.digits(*len)),
        Source::Choice(set) => FieldValue::text(provider.choose(set)),
        Source::TableCode(table) => FieldValue::text(provider.choose_code(table)),
        Source::TableLookup { table, key } => {
            let code = lookup(current, key, field, "sibling")?.as_text();
            FieldValue::text(table.lookup(&code).unwrap_or_default())
        }
        Source::Int(start, end) => FieldValue::Int(provider.int_in(*start..*end)),
        Source::Date(from, to) => FieldValue::Date(provider.date_in_years(*from, *to)),
        Source::DateAhead(years) => {
            FieldValue::Date(provider.date_from_year(ctx.generated_at.date(), *years))
        }
        Source::TimeOfDay => FieldValue::Time(provider.time_of_day()),
        Source::GeneratedAt => {
            FieldValue::Text(ctx.generated_at.format("%Y%m%d%H%M%S").to_string())
        }
        Source::FirstName => FieldValue::Text(provider.first_name()),
        Source::LastName => FieldValue::Text(provider.last_name()),
        Source::Email => FieldValue::Text(provider.email()),
        Source::Phone => FieldValue::Text(provider.phone()),
        Source::StreetAddress => FieldValue::Text(provider.street_address()),
        Source::City => FieldValue::Text(provider.city()),
        Source::StateAbbr => FieldValue::Text(provider.state_abbr()),
        Source::Province => FieldValue::Text(provider.province()),
        Source::ZipCode => FieldValue::Text(provider.zip_code()),
        Source::PostalCode => FieldValue::Text(provider.postal_code()),
        Source::CountryAlpha3 => FieldValue::text(provider.country_alpha3()),
        Source::Sentence => FieldValue::Text(provider.sentence()),
        Source::LanguageCode => FieldValue::text(provider.language_code()),
        Source::WeightKg => FieldValue::Int(provider.weight_kg()),
        Source::HeightM => FieldValue::Text(provider.height_m()),
        Source::Indexed(label) => FieldValue::Text(format!("{label} {}", ctx.row_index)),
        Source::Pattern(pattern) => FieldValue::Text(provider.pattern(*pattern)?),
        Source::Percentage => FieldValue::Text(provider.percentage()),
        Source::Joined { parts, separator } => {
            let mut rendered = Vec::with_capacity(parts.len());
            for part in parts.iter() {
                rendered.push(draw(part, ctx, current, provider, field)?.to_string());
            }
            FieldValue::Text(rendered.join(*separator))
        }
        Source::Sibling(name) => lookup(current, name, field, "sibling")?.clone(),
        Source::Parent(name) => {
            let parent = ctx.parent.ok_or_else(|| {
                GenerationError::InvalidLayout(format!("field '{field}' has no parent row"))
            })?;
            lookup(&parent.row, name, field, "parent")?.clone()
        }
        Source::LoadType => FieldValue::text(ctx.flags.load_type.as_str()),
        Source::ValidationCode => FieldValue::Int(i64::from(ctx.flags.file_validation_code)),
        Source::FileTypeTag => FieldValue::text(ctx.format.file_type_tag()),
        Source::BodyCount => FieldValue::Int(ctx.body_count as i64),
        Source::FirstOf(arms) => {
            for arm in arms.iter() {
                if holds(&arm.when, ctx, current, field)? {
                    return draw(&arm.then, ctx, current, provider, field);
                }
            }
            FieldValue::Empty
        }
    };
    Ok(value)
}

fn lookup<'a>(
    view: &RowView<'a>,
    name: &str,
    field: &str,
    scope: &str,
) -> Result<&'a FieldValue, GenerationError> {
    view.get(name).ok_or_else(|| {
        GenerationError::InvalidLayout(format!(
            "field '{field}' reads {scope} field '{name}' before it is computed"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use flatgen_core::RecordCounts;

    use crate::codesets::YES_NO;

    static TABLE: &[FieldSpec] = &[
        FieldSpec::literal("Record Id", "DTL"),
        FieldSpec::optional("Middle Name", Source::FirstName),
        FieldSpec::flag("Vision Plan Indicator"),
        FieldSpec::when(
            "Group Number",
            Presence::ValidationCodeIn(&[2, 5]),
            Source::Alphanumeric(10),
        ),
        FieldSpec::optional("Reason", Source::Literal("2")),
        FieldSpec::when(
            "End Date",
            Presence::FieldEquals("Reason", "2"),
            Source::Date(1980, 2019),
        ),
        FieldSpec::always("Indicator", Source::Choice(&YES_NO)),
        FieldSpec::always("Indicator Copy", Source::Sibling("Indicator")),
        FieldSpec::optional("Plan Name", Source::Indexed("Plan")),
    ];

    fn flags(optional_fields: bool, code: u8) -> ControlFlags {
        ControlFlags::new(LoadType::Full, optional_fields, code, RecordCounts::Entries(1))
            .expect("valid flags")
    }

    fn context(flags: &ControlFlags) -> RowContext<'_> {
        RowContext {
            format: FileFormat::Eligibility,
            flags,
            generated_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|date| date.and_hms_opt(8, 0, 0))
                .expect("timestamp"),
            payer_id: "PAYER00001",
            header: None,
            parent: None,
            row_index: 3,
            body_count: 0,
        }
    }

    #[test]
    fn optional_fields_off_leaves_gated_fields_empty() {
        let fields = field_table(&[TABLE]);
        let flags = flags(false, 0);
        let mut provider = ValueProvider::seeded(1);
        let row = compute_row(&fields, &context(&flags), &mut provider).expect("row");
        let view = RowView::new(&fields, &row);

        assert!(view.get("Middle Name").expect("middle").is_empty());
        assert!(view.get("Vision Plan Indicator").expect("vision").matches("N"));
        assert!(view.get("Group Number").expect("group").is_empty());
        assert!(view.get("End Date").expect("end").is_empty());
        assert!(view.get("Plan Name").expect("plan").is_empty());
    }

    #[test]
    fn optional_fields_on_populates_and_unlocks_sibling_rules() {
        let fields = field_table(&[TABLE]);
        let flags = flags(true, 5);
        let mut provider = ValueProvider::seeded(2);
        let row = compute_row(&fields, &context(&flags), &mut provider).expect("row");
        let view = RowView::new(&fields, &row);

        assert!(!view.get("Middle Name").expect("middle").is_empty());
        assert!(view.get("Vision Plan Indicator").expect("vision").matches("Y"));
        assert_eq!(view.get("Group Number").expect("group").as_text().len(), 10);
        assert!(matches!(view.get("End Date"), Some(FieldValue::Date(_))));
        assert!(view.get("Plan Name").expect("plan").matches("Plan 3"));
        assert_eq!(view.get("Indicator"), view.get("Indicator Copy"));
    }

    #[test]
    fn reading_a_later_field_is_a_layout_error() {
        static BROKEN: &[FieldSpec] = &[
            FieldSpec::always("Copy", Source::Sibling("Original")),
            FieldSpec::literal("Original", "x"),
        ];
        let fields = field_table(&[BROKEN]);
        let flags = flags(false, 0);
        let mut provider = ValueProvider::seeded(3);
        let err = compute_row(&fields, &context(&flags), &mut provider)
            .expect_err("forward read must fail");
        assert!(matches!(err, GenerationError::InvalidLayout(_)));
    }
}
