//! Declarative field tables.
//!
//! Every record kind is described by an ordered list of [`FieldSpec`]s. A
//! spec pairs a presence predicate with the source drawn when it holds and
//! the source drawn when it does not (the empty sentinel unless stated).
//! Fields are evaluated in table order, so a predicate or source may only
//! read fields declared before it.

use flatgen_core::RecordKind;

use crate::codesets::{CodeSet, CodeTable};

/// Decides whether a field takes its primary source.
#[derive(Debug, Clone, Copy)]
pub enum Presence {
    Always,
    /// The run was asked to populate non-mandatory fields.
    OptionalFields,
    /// The run's file validation code is one of the listed codes.
    ValidationCodeIn(&'static [u8]),
    /// The load type is a full load.
    FullLoad,
    /// A header field of the same file renders as the given value.
    HeaderEquals(&'static str, &'static str),
    /// An earlier field of the same row renders as the given value.
    FieldEquals(&'static str, &'static str),
    /// An earlier field of the same row renders as none of the values.
    FieldNotIn(&'static str, &'static [&'static str]),
    /// The row is a status row owned by a parent of this kind.
    ParentIs(RecordKind),
    All(&'static [Presence]),
}

/// Where a field value comes from.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    Empty,
    Literal(&'static str),
    /// Assigned by the sequencer when the line is written.
    RecordNumber,
    /// The payer identifier shared by every record of the file.
    PayerId,
    Alphanumeric(usize),
    Digits(usize),
    Choice(&'static CodeSet),
    /// A code drawn from the keys of a table.
    TableCode(&'static CodeTable),
    /// Description of the code held by an earlier field.
    TableLookup {
        table: &'static CodeTable,
        key: &'static str,
    },
    /// Integer in `start..end`.
    Int(i64, i64),
    /// Date between two years, both inclusive.
    Date(i32, i32),
    /// Date from the generation year up to that many years later.
    DateAhead(i32),
    TimeOfDay,
    /// Generation timestamp as `%Y%m%d%H%M%S`.
    GeneratedAt,
    FirstName,
    LastName,
    Email,
    Phone,
    StreetAddress,
    City,
    StateAbbr,
    Province,
    ZipCode,
    PostalCode,
    CountryAlpha3,
    Sentence,
    LanguageCode,
    WeightKg,
    HeightM,
    /// `"{label} {row}"` with the zero-based row index.
    Indexed(&'static str),
    Pattern(&'static str),
    /// Two-digit fraction with its leading zero stripped.
    Percentage,
    /// Parts rendered and joined with a separator.
    Joined {
        parts: &'static [Source],
        separator: &'static str,
    },
    /// Value of an earlier field of the same row.
    Sibling(&'static str),
    /// Value of a field of the owning parent row.
    Parent(&'static str),
    LoadType,
    ValidationCode,
    FileTypeTag,
    /// Number of body lines in the file.
    BodyCount,
    /// First arm whose predicate holds; empty when none does.
    FirstOf(&'static [Arm]),
}

#[derive(Debug, Clone, Copy)]
pub struct Arm {
    pub when: Presence,
    pub then: Source,
}

impl Arm {
    pub const fn new(when: Presence, then: Source) -> Self {
        Self { when, then }
    }
}

/// One named column of a record kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub presence: Presence,
    pub source: Source,
    pub otherwise: Source,
}

impl FieldSpec {
    pub const fn always(name: &'static str, source: Source) -> Self {
        Self::when(name, Presence::Always, source)
    }

    pub const fn optional(name: &'static str, source: Source) -> Self {
        Self::when(name, Presence::OptionalFields, source)
    }

    pub const fn when(name: &'static str, presence: Presence, source: Source) -> Self {
        Self {
            name,
            presence,
            source,
            otherwise: Source::Empty,
        }
    }

    pub const fn empty(name: &'static str) -> Self {
        Self::always(name, Source::Empty)
    }

    pub const fn literal(name: &'static str, value: &'static str) -> Self {
        Self::always(name, Source::Literal(value))
    }

    /// Replace the value used when the predicate does not hold.
    pub const fn or(mut self, otherwise: Source) -> Self {
        self.otherwise = otherwise;
        self
    }

    /// Optional flag field: `Y` when optional fields are requested, else `N`.
    pub const fn flag(name: &'static str) -> Self {
        Self::optional(name, Source::Literal("Y")).or(Source::Literal("N"))
    }
}

impl Presence {
    /// Earlier sibling fields this predicate reads.
    pub fn sibling_reads(&self, out: &mut Vec<&'static str>) {
        match self {
            Presence::FieldEquals(field, _) | Presence::FieldNotIn(field, _) => out.push(*field),
            Presence::All(parts) => parts.iter().for_each(|part| part.sibling_reads(out)),
            _ => {}
        }
    }

    /// Header fields this predicate reads.
    pub fn header_reads(&self, out: &mut Vec<&'static str>) {
        match self {
            Presence::HeaderEquals(field, _) => out.push(*field),
            Presence::All(parts) => parts.iter().for_each(|part| part.header_reads(out)),
            _ => {}
        }
    }
}

impl Source {
    pub fn sibling_reads(&self, out: &mut Vec<&'static str>) {
        match self {
            Source::Sibling(field) => out.push(*field),
            Source::TableLookup { key, .. } => out.push(*key),
            Source::Joined { parts, .. } => parts.iter().for_each(|part| part.sibling_reads(out)),
            Source::FirstOf(arms) => arms.iter().for_each(|arm| {
                arm.when.sibling_reads(out);
                arm.then.sibling_reads(out);
            }),
            _ => {}
        }
    }

    pub fn parent_reads(&self, out: &mut Vec<&'static str>) {
        match self {
            Source::Parent(field) => out.push(*field),
            Source::Joined { parts, .. } => parts.iter().for_each(|part| part.parent_reads(out)),
            Source::FirstOf(arms) => arms.iter().for_each(|arm| arm.then.parent_reads(out)),
            _ => {}
        }
    }

    pub fn header_reads(&self, out: &mut Vec<&'static str>) {
        if let Source::FirstOf(arms) = self {
            arms.iter().for_each(|arm| arm.when.header_reads(out));
        }
    }

    /// Names of the code sets and tables this source draws from but that hold
    /// no values.
    pub fn empty_codes(&self, out: &mut Vec<&'static str>) {
        match self {
            Source::Choice(set) if set.is_empty() => out.push(set.name),
            Source::TableCode(table) | Source::TableLookup { table, .. } if table.is_empty() => {
                out.push(table.name)
            }
            Source::Joined { parts, .. } => parts.iter().for_each(|part| part.empty_codes(out)),
            Source::FirstOf(arms) => arms.iter().for_each(|arm| arm.then.empty_codes(out)),
            _ => {}
        }
    }
}

impl FieldSpec {
    pub fn sibling_reads(&self) -> Vec<&'static str> {
        let mut reads = Vec::new();
        self.presence.sibling_reads(&mut reads);
        self.source.sibling_reads(&mut reads);
        self.otherwise.sibling_reads(&mut reads);
        reads
    }

    pub fn parent_reads(&self) -> Vec<&'static str> {
        let mut reads = Vec::new();
        self.source.parent_reads(&mut reads);
        self.otherwise.parent_reads(&mut reads);
        reads
    }

    pub fn header_reads(&self) -> Vec<&'static str> {
        let mut reads = Vec::new();
        self.presence.header_reads(&mut reads);
        self.source.header_reads(&mut reads);
        self.otherwise.header_reads(&mut reads);
        reads
    }

    pub fn empty_codes(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        self.source.empty_codes(&mut names);
        self.otherwise.empty_codes(&mut names);
        names
    }

    /// True when only `optional_fields` decides between a value and empty.
    pub fn is_optional_only(&self) -> bool {
        matches!(self.presence, Presence::OptionalFields)
            && matches!(self.otherwise, Source::Empty)
            && !matches!(self.source, Source::Empty)
    }
}
