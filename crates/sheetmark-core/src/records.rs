use serde::Serialize;

/// Logical columns pulled from every trademark sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandField {
    BrandName,
    Image,
    RegistrationDate,
    ExpirationDate,
    LastUpdatedDate,
    Applicants,
    Representatives,
}

impl BrandField {
    pub const COUNT: usize = 7;

    pub const ALL: [BrandField; BrandField::COUNT] = [
        BrandField::BrandName,
        BrandField::Image,
        BrandField::RegistrationDate,
        BrandField::ExpirationDate,
        BrandField::LastUpdatedDate,
        BrandField::Applicants,
        BrandField::Representatives,
    ];

    /// Field name as it appears in header cells and serialized records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BrandField::BrandName => "BrandName",
            BrandField::Image => "IMAGE",
            BrandField::RegistrationDate => "RegistrationDate",
            BrandField::ExpirationDate => "ExpirationDate",
            BrandField::LastUpdatedDate => "LastUpdatedDate",
            BrandField::Applicants => "Applicants",
            BrandField::Representatives => "Representatives",
        }
    }
}

impl std::fmt::Display for BrandField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One matching sheet row, normalized to the fixed lookup schema.
///
/// Field names on the wire keep the spreadsheet casing (`BrandName`, `IMAGE`,
/// ...) because that is what clients render. Records carry no identity beyond
/// their values and are never deduplicated across sheets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrandRecord {
    #[serde(rename = "sheetId")]
    pub sheet_id: String,
    #[serde(rename = "BrandName")]
    pub brand_name: String,
    /// Logo URL; absent when the sheet has no `IMAGE` column or the row stops short of it.
    #[serde(rename = "IMAGE", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "RegistrationDate")]
    pub registration_date: String,
    #[serde(rename = "ExpirationDate")]
    pub expiration_date: String,
    #[serde(rename = "LastUpdatedDate")]
    pub last_updated_date: String,
    #[serde(rename = "Applicants")]
    pub applicants: String,
    #[serde(rename = "Representatives")]
    pub representatives: String,
}
