use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::FormError;

pub const DEFAULT_COUNTRY: &str = "IN";
pub const DEFAULT_CONTACT_EMAIL: &str = "test@example.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeDirection {
    #[default]
    Import,
    Export,
}

impl TradeDirection {
    /// Spelling used by the form (`import` / `export`).
    pub fn as_form_value(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Export => "export",
        }
    }

    /// Spelling expected by the search backend (`Import` / `Export`).
    pub fn as_wire_value(self) -> &'static str {
        match self {
            Self::Import => "Import",
            Self::Export => "Export",
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_form_value())
    }
}

impl FromStr for TradeDirection {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("import") {
            Ok(Self::Import)
        } else if trimmed.eq_ignore_ascii_case("export") {
            Ok(Self::Export)
        } else {
            Err(FormError::InvalidDirection(value.to_string()))
        }
    }
}

/// The eleven user-facing search fields, named the way the form names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    FromDate,
    ToDate,
    Country,
    Direction,
    BuyerName,
    HsCode,
    SupplierName,
    OriginCountry,
    ProDesc,
    BillNo,
    ContactEmail,
}

impl SearchField {
    pub const ALL: [SearchField; 11] = [
        Self::FromDate,
        Self::ToDate,
        Self::Country,
        Self::Direction,
        Self::BuyerName,
        Self::HsCode,
        Self::SupplierName,
        Self::OriginCountry,
        Self::ProDesc,
        Self::BillNo,
        Self::ContactEmail,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FromDate => "fromDate",
            Self::ToDate => "toDate",
            Self::Country => "country",
            Self::Direction => "direction",
            Self::BuyerName => "buyerName",
            Self::HsCode => "hsCode",
            Self::SupplierName => "supplierName",
            Self::OriginCountry => "originCountry",
            Self::ProDesc => "proDesc",
            Self::BillNo => "billNo",
            Self::ContactEmail => "contactEmail",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchField {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        // Legacy form name for direction.
        if name == "inOut" {
            return Ok(Self::Direction);
        }
        Self::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}

/// In-memory record of everything the user typed into the search form.
///
/// Every field is always present; "unset" is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub from_date: String,
    pub to_date: String,
    pub country: String,
    pub direction: TradeDirection,
    pub buyer_name: String,
    pub hs_code: String,
    pub supplier_name: String,
    pub origin_country: String,
    pub pro_desc: String,
    pub bill_no: String,
    pub contact_email: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::with_contact_email(DEFAULT_CONTACT_EMAIL)
    }
}

impl SearchQuery {
    pub fn with_contact_email(contact_email: impl Into<String>) -> Self {
        Self {
            from_date: String::new(),
            to_date: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            direction: TradeDirection::default(),
            buyer_name: String::new(),
            hs_code: String::new(),
            supplier_name: String::new(),
            origin_country: String::new(),
            pro_desc: String::new(),
            bill_no: String::new(),
            contact_email: contact_email.into(),
        }
    }

    /// Replaces exactly one field. On error the record is left untouched.
    pub fn set_field(
        &mut self,
        field: SearchField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let value = value.into();
        let slot = match field {
            SearchField::Direction => {
                self.direction = value.parse()?;
                return Ok(());
            }
            SearchField::ContactEmail => return Err(FormError::ReadOnlyField(field.name())),
            SearchField::FromDate => &mut self.from_date,
            SearchField::ToDate => &mut self.to_date,
            SearchField::Country => &mut self.country,
            SearchField::BuyerName => &mut self.buyer_name,
            SearchField::HsCode => &mut self.hs_code,
            SearchField::SupplierName => &mut self.supplier_name,
            SearchField::OriginCountry => &mut self.origin_country,
            SearchField::ProDesc => &mut self.pro_desc,
            SearchField::BillNo => &mut self.bill_no,
        };
        *slot = value;
        Ok(())
    }

    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::FromDate => &self.from_date,
            SearchField::ToDate => &self.to_date,
            SearchField::Country => &self.country,
            SearchField::Direction => self.direction.as_form_value(),
            SearchField::BuyerName => &self.buyer_name,
            SearchField::HsCode => &self.hs_code,
            SearchField::SupplierName => &self.supplier_name,
            SearchField::OriginCountry => &self.origin_country,
            SearchField::ProDesc => &self.pro_desc,
            SearchField::BillNo => &self.bill_no,
            SearchField::ContactEmail => &self.contact_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_blank_form() {
        let query = SearchQuery::default();
        assert_eq!(query.country, "IN");
        assert_eq!(query.direction, TradeDirection::Import);
        assert_eq!(query.contact_email, DEFAULT_CONTACT_EMAIL);
        for field in [
            SearchField::FromDate,
            SearchField::ToDate,
            SearchField::BuyerName,
            SearchField::HsCode,
            SearchField::SupplierName,
            SearchField::OriginCountry,
            SearchField::ProDesc,
            SearchField::BillNo,
        ] {
            assert_eq!(query.field(field), "", "{field} should start empty");
        }
    }

    #[test]
    fn set_field_changes_only_the_named_field() {
        let mut query = SearchQuery::default();
        let edits = [
            (SearchField::BuyerName, "ACME"),
            (SearchField::HsCode, "8471"),
            (SearchField::FromDate, "2024-01-01"),
            (SearchField::Direction, "export"),
            (SearchField::Country, "US"),
            (SearchField::BillNo, "B-77"),
            (SearchField::BuyerName, ""),
        ];

        for (field, value) in edits {
            let before = query.clone();
            query.set_field(field, value).expect("editable field");
            for other in SearchField::ALL {
                if other == field {
                    continue;
                }
                assert_eq!(
                    query.field(other),
                    before.field(other),
                    "{other} changed while setting {field}"
                );
            }
            assert_eq!(query.field(field), value);
        }
    }

    #[test]
    fn direction_accepts_any_casing_and_rejects_unknown_values() {
        let mut query = SearchQuery::default();
        query
            .set_field(SearchField::Direction, "EXPORT")
            .expect("upper case");
        assert_eq!(query.direction, TradeDirection::Export);

        let err = query
            .set_field(SearchField::Direction, "sideways")
            .expect_err("must reject");
        assert!(matches!(err, FormError::InvalidDirection(ref v) if v == "sideways"));
        assert_eq!(query.direction, TradeDirection::Export);
    }

    #[test]
    fn contact_email_is_read_only() {
        let mut query = SearchQuery::with_contact_email("ops@example.com");
        let err = query
            .set_field(SearchField::ContactEmail, "other@example.com")
            .expect_err("read only");
        assert!(matches!(err, FormError::ReadOnlyField("contactEmail")));
        assert_eq!(query.contact_email, "ops@example.com");
    }

    #[test]
    fn parses_field_names() {
        assert_eq!("hsCode".parse::<SearchField>().ok(), Some(SearchField::HsCode));
        assert_eq!("inOut".parse::<SearchField>().ok(), Some(SearchField::Direction));
        assert!(matches!(
            "hs_code".parse::<SearchField>(),
            Err(FormError::UnknownField(_))
        ));
    }
}
