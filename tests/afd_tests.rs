use chrono::{DateTime, NaiveDate};
use jornada::core::signature::sign;
use jornada::export::afd::{AfdRecord, render_afd};
use jornada::models::company::Company;
use jornada::utils::fmt::{pad_numeric, pad_text};

fn company() -> Company {
    Company {
        id: "c1".to_string(),
        tax_id: "12345678000199".to_string(),
        legal_name: "Empresa Teste Ltda".to_string(),
        geofence: None,
    }
}

fn at(s: &str) -> DateTime<chrono::FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn records(n: u64) -> Vec<AfdRecord> {
    (1..=n)
        .map(|i| AfdRecord {
            nsr: i,
            timestamp: at(&format!("2023-01-01T{:02}:00:00-03:00", 7 + i)),
            employee_tax_id: "12345678901".to_string(),
        })
        .collect()
}

fn render(n: u64) -> String {
    render_afd(
        &company(),
        "1",
        &records(n),
        day("2023-01-01"),
        day("2023-01-31"),
        &at("2023-02-01T10:30:00-03:00"),
    )
}

#[test]
fn header_layout_is_fixed_width() {
    let content = render(1);
    let header = content.split("\r\n").next().unwrap();

    // 9 NSR + 1 type + 1 id-type + 14 tax id + 12 CEI + 150 name + 17 REP
    // + 8 start + 8 end + 12 generation + 4 CRC
    assert_eq!(header.chars().count(), 236);
    assert!(header.starts_with("000000001"));
    assert_eq!(&header[9..10], "1"); // record type
    assert_eq!(&header[10..11], "1"); // CNPJ
    assert_eq!(&header[11..25], "12345678000199");
    assert_eq!(&header[25..37], "            "); // CEI, unused
    assert_eq!(&header[37..187], pad_text("Empresa Teste Ltda", 150));
    assert_eq!(&header[187..204], pad_numeric("1", 17));
    assert_eq!(&header[204..212], "01012023");
    assert_eq!(&header[212..220], "31012023");
    assert_eq!(&header[220..232], "010220231030");
    assert_eq!(&header[232..236], "0000");
}

#[test]
fn cpf_company_gets_id_type_2() {
    let mut c = company();
    c.tax_id = "12345678901".to_string();
    let content = render_afd(
        &c,
        "1",
        &[],
        day("2023-01-01"),
        day("2023-01-31"),
        &at("2023-02-01T10:30:00-03:00"),
    );
    let header = content.split("\r\n").next().unwrap();
    assert_eq!(&header[10..11], "2");
    // The CPF still zero-pads into the 14-digit field.
    assert_eq!(&header[11..25], "00012345678901");
}

#[test]
fn marking_line_embeds_its_own_digest() {
    let content = render(1);
    let line = content.split("\r\n").nth(1).unwrap();

    // 9 NSR + 1 type + 25 date-time + 11 CPF + 64 digest
    assert_eq!(line.len(), 110);
    let (prefix, digest) = line.split_at(46);
    assert_eq!(prefix, "00000000172023-01-01T08:00:00-03:0012345678901");
    assert_eq!(digest, sign(prefix.as_bytes()));
}

#[test]
fn body_keeps_caller_order() {
    let recs = vec![
        AfdRecord {
            nsr: 1,
            timestamp: at("2023-01-01T17:00:00-03:00"),
            employee_tax_id: "12345678901".to_string(),
        },
        AfdRecord {
            nsr: 2,
            timestamp: at("2023-01-01T08:00:00-03:00"),
            employee_tax_id: "12345678901".to_string(),
        },
    ];
    let content = render_afd(
        &company(),
        "1",
        &recs,
        day("2023-01-01"),
        day("2023-01-31"),
        &at("2023-02-01T10:30:00-03:00"),
    );
    let lines: Vec<&str> = content.split("\r\n").collect();
    // The encoder must not re-sort: sequencing is the caller's contract.
    assert!(lines[1].contains("17:00:00"));
    assert!(lines[2].contains("08:00:00"));
}

#[test]
fn trailer_counts_every_line_including_itself() {
    for n in [1u64, 3, 10] {
        let content = render(n);
        let lines: Vec<&str> = content.split("\r\n").collect();
        assert_eq!(lines.len(), n as usize + 2);

        let trailer = lines.last().unwrap();
        assert_eq!(&trailer[0..9], pad_numeric(&(n + 2).to_string(), 9));
        assert_eq!(&trailer[9..10], "9");
        assert_eq!(&trailer[10..], "0".repeat(36));
    }
}

#[test]
fn crlf_joined_without_trailing_newline() {
    let content = render(2);
    assert!(content.contains("\r\n"));
    assert!(!content.ends_with("\r\n"));
    assert!(!content.ends_with('\n'));
}

#[test]
fn overlong_rep_id_truncates_to_field_width() {
    let content = render_afd(
        &company(),
        "123456789012345678", // 18 digits into a 17-digit field
        &[],
        day("2023-01-01"),
        day("2023-01-31"),
        &at("2023-02-01T10:30:00-03:00"),
    );
    let header = content.split("\r\n").next().unwrap();
    assert_eq!(&header[187..204], "12345678901234567");
    assert_eq!(header.chars().count(), 236);
}

#[test]
fn overlong_legal_name_truncates_at_150() {
    let mut c = company();
    c.legal_name = "X".repeat(200);
    let content = render_afd(
        &c,
        "1",
        &[],
        day("2023-01-01"),
        day("2023-01-31"),
        &at("2023-02-01T10:30:00-03:00"),
    );
    let header = content.split("\r\n").next().unwrap();
    assert_eq!(&header[37..187], "X".repeat(150));
    assert_eq!(header.chars().count(), 236);
}
