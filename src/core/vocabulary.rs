/*
 * The closed header vocabulary and the leaf-name classifier. The vocabulary
 * is a configuration constant of the extraction format, not something
 * inferred from documents: every content element an author wants exported
 * must carry the `__extract` tag in its layer name and contain one of the
 * vocabulary labels as a substring.
 */
use std::fmt;

/// Case-insensitive marker an element name must carry to be eligible.
pub const EXTRACT_TAG: &str = "__extract";

/*
 * One semantic column of the output. The declared order of `VOCABULARY` is a
 * contract twice over: it is the column order of the CSV header row, and it
 * is the matching order of the classifier (first containment match wins).
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Background,
    H1,
    Oferta1,
    Oferta2,
    Precio,
    Cta,
    Sello,
}

impl HeaderField {
    pub const COUNT: usize = 7;

    pub const VOCABULARY: [HeaderField; HeaderField::COUNT] = [
        HeaderField::Background,
        HeaderField::H1,
        HeaderField::Oferta1,
        HeaderField::Oferta2,
        HeaderField::Precio,
        HeaderField::Cta,
        HeaderField::Sello,
    ];

    /// Column label as printed in the CSV header row.
    pub fn label(&self) -> &'static str {
        match self {
            HeaderField::Background => "Background",
            HeaderField::H1 => "H1",
            HeaderField::Oferta1 => "Oferta 1",
            HeaderField::Oferta2 => "Oferta 2",
            HeaderField::Precio => "Precio",
            HeaderField::Cta => "CTA",
            HeaderField::Sello => "Sello",
        }
    }

    // Lowercase form used for containment matching against lowered names.
    fn pattern(&self) -> &'static str {
        match self {
            HeaderField::Background => "background",
            HeaderField::H1 => "h1",
            HeaderField::Oferta1 => "oferta 1",
            HeaderField::Oferta2 => "oferta 2",
            HeaderField::Precio => "precio",
            HeaderField::Cta => "cta",
            HeaderField::Sello => "sello",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/*
 * The three possible outcomes of classifying one flattened leaf. `Untagged`
 * is the normal case for structural layers (groups, decoration) and carries
 * no diagnostic; `Unrecognized` means the author tagged an element for
 * extraction but its name matches no vocabulary entry, which is worth
 * surfacing as a warning.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafClassification {
    Field(HeaderField),
    Untagged,
    Unrecognized,
}

/*
 * Classifies an element display name. The eligibility gate and the
 * vocabulary match are both case-insensitive substring checks; vocabulary
 * entries are tried in declared order and the first hit wins (first-match,
 * not best-match).
 */
pub fn classify_element_name(element_name: &str) -> LeafClassification {
    let lowered = element_name.to_lowercase();
    if !lowered.contains(EXTRACT_TAG) {
        return LeafClassification::Untagged;
    }
    for field in HeaderField::VOCABULARY {
        if lowered.contains(field.pattern()) {
            return LeafClassification::Field(field);
        }
    }
    LeafClassification::Unrecognized
}
