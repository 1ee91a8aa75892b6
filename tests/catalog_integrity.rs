use ecodash::catalog::{self, COUNTRIES, METRICS, WINDOWS};

#[test]
fn metric_ids_resolve_to_provider_indicators() {
    assert_eq!(catalog::metric("GDP").unwrap().indicator, "NY.GDP.MKTP.CD");
    assert_eq!(catalog::metric("GDPPC").unwrap().indicator, "NY.GDP.PCAP.CD");
    assert_eq!(catalog::metric("POP").unwrap().indicator, "SP.POP.TOTL");
}

#[test]
fn lookups_ignore_case() {
    assert_eq!(catalog::metric("gdp").unwrap().id, "GDP");
    assert_eq!(catalog::country("in").unwrap().name, "India");
    assert_eq!(catalog::country("De").unwrap().name, "Germany");
}

#[test]
fn unknown_ids_resolve_to_none() {
    assert!(catalog::metric("XYZ").is_none());
    assert!(catalog::country("ZZ").is_none());
}

#[test]
fn selection_sets_match_the_shell() {
    assert_eq!(COUNTRIES.len(), 10);
    assert_eq!(METRICS.len(), 3);
    assert_eq!(WINDOWS, &[5, 10, 20]);
    assert!(COUNTRIES.iter().any(|c| c.name == "United Kingdom"));
    assert!(METRICS.iter().all(|m| !m.description.is_empty()));
}
