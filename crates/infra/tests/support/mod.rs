//! Simulated ledger server responses for wiremock suites.

#![allow(dead_code)]

use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockBuilder, ResponseTemplate};

/// One voucher line of a simulated export: `(ledger, amount)`.
pub type Entry<'a> = (&'a str, &'a str);

pub fn voucher_xml(
    remote_id: &str,
    voucher_type: &str,
    date: &str,
    entries: &[Entry<'_>],
) -> String {
    let lines: String = entries
        .iter()
        .map(|(ledger, amount)| {
            format!(
                "<ALLLEDGERENTRIES.LIST><LEDGERNAME>{ledger}</LEDGERNAME>\
                 <AMOUNT>{amount}</AMOUNT></ALLLEDGERENTRIES.LIST>"
            )
        })
        .collect();
    format!(
        "<VOUCHER REMOTEID=\"{remote_id}\" VCHTYPE=\"{voucher_type}\">\
         <DATE>{date}</DATE><VOUCHERTYPENAME>{voucher_type}</VOUCHERTYPENAME>{lines}</VOUCHER>"
    )
}

pub fn export_of(vouchers: &[String]) -> String {
    format!(
        "<ENVELOPE><BODY><DATA><COLLECTION>{}</COLLECTION></DATA></BODY></ENVELOPE>",
        vouchers.concat()
    )
}

pub fn import_result(created: u32, altered: u32, deleted: u32) -> String {
    format!(
        "<RESPONSE><CREATED>{created}</CREATED><ALTERED>{altered}</ALTERED>\
         <DELETED>{deleted}</DELETED><LASTVCHID>0</LASTVCHID><ERRORS>0</ERRORS></RESPONSE>"
    )
}

pub fn xml(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(body)
}

pub fn list_request() -> MockBuilder {
    Mock::given(method("POST")).and(body_string_contains("<TYPE>Voucher</TYPE>"))
}

pub fn delete_request(remote_id: &str) -> MockBuilder {
    Mock::given(method("POST"))
        .and(body_string_contains(r#"ACTION="Delete""#))
        .and(body_string_contains(format!("REMOTEID=\"{remote_id}\"")))
}

pub fn create_request(remote_id: &str) -> MockBuilder {
    Mock::given(method("POST"))
        .and(body_string_contains(r#"ACTION="Create""#))
        .and(body_string_contains(format!("REMOTEID=\"{remote_id}\"")))
}
