use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::SearchQuery;

/// JSON body POSTed to `<backend>/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub email: String,
    pub from_date: String,
    pub to_date: String,
    pub country: String,
    pub in_out: String,
    pub buyer_name: String,
    pub hs_code: String,
    pub supplier_name: String,
    pub origin_country: String,
    pub pro_desc: String,
    pub bill_no: String,
}

impl From<&SearchQuery> for SearchRequest {
    fn from(query: &SearchQuery) -> Self {
        Self {
            email: query.contact_email.clone(),
            from_date: query.from_date.clone(),
            to_date: query.to_date.clone(),
            country: query.country.clone(),
            in_out: query.direction.as_wire_value().to_string(),
            buyer_name: query.buyer_name.clone(),
            hs_code: query.hs_code.clone(),
            supplier_name: query.supplier_name.clone(),
            origin_country: query.origin_country.clone(),
            pro_desc: query.pro_desc.clone(),
            bill_no: query.bill_no.clone(),
        }
    }
}

/// Success body returned by the search backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchAcknowledgement {
    #[serde(rename = "messageCode", default)]
    pub message_code: Value,
}

impl SearchAcknowledgement {
    pub fn message_code_text(&self) -> String {
        match &self.message_code {
            Value::Null => "unknown".to_string(),
            Value::String(code) => code.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{SearchField, TradeDirection};

    #[test]
    fn maps_form_names_to_backend_names() {
        let mut query = SearchQuery::default();
        query.set_field(SearchField::FromDate, "2024-03-01").unwrap();
        query.set_field(SearchField::ToDate, "2024-03-31").unwrap();
        query.set_field(SearchField::BuyerName, "AASHITA").unwrap();
        query.set_field(SearchField::HsCode, "0904").unwrap();
        query.set_field(SearchField::SupplierName, "Spice Co").unwrap();
        query.set_field(SearchField::OriginCountry, "VN").unwrap();
        query.set_field(SearchField::ProDesc, "black pepper").unwrap();
        query.set_field(SearchField::BillNo, "BL-1").unwrap();

        let body = serde_json::to_value(SearchRequest::from(&query)).unwrap();
        assert_eq!(
            body,
            json!({
                "email": "test@example.com",
                "from_date": "2024-03-01",
                "to_date": "2024-03-31",
                "country": "IN",
                "in_out": "Import",
                "buyer_name": "AASHITA",
                "hs_code": "0904",
                "supplier_name": "Spice Co",
                "origin_country": "VN",
                "pro_desc": "black pepper",
                "bill_no": "BL-1",
            })
        );
    }

    #[test]
    fn in_out_is_always_capitalized() {
        for (input, expected) in [
            ("import", "Import"),
            ("export", "Export"),
            ("Import", "Import"),
            ("EXPORT", "Export"),
        ] {
            let mut query = SearchQuery::default();
            query.set_field(SearchField::Direction, input).unwrap();
            assert_eq!(SearchRequest::from(&query).in_out, expected);
        }
        assert_eq!(TradeDirection::Export.as_wire_value(), "Export");
    }

    #[test]
    fn unset_dates_serialize_as_empty_strings() {
        let body = serde_json::to_value(SearchRequest::from(&SearchQuery::default())).unwrap();
        assert_eq!(body["from_date"], json!(""));
        assert_eq!(body["to_date"], json!(""));
    }

    #[test]
    fn renders_opaque_message_codes() {
        let ack: SearchAcknowledgement =
            serde_json::from_value(json!({ "messageCode": "OK123" })).unwrap();
        assert_eq!(ack.message_code_text(), "OK123");

        let ack: SearchAcknowledgement =
            serde_json::from_value(json!({ "messageCode": 202 })).unwrap();
        assert_eq!(ack.message_code_text(), "202");

        let ack: SearchAcknowledgement = serde_json::from_value(json!({})).unwrap();
        assert_eq!(ack.message_code_text(), "unknown");
    }
}
