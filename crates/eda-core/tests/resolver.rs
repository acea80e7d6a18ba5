//! Integration tests for country resolution against TSV-loaded tables.

use std::fs;
use std::path::PathBuf;

use eda_core::{CoreError, CountryResolver, Resolution, SearchTerm};
use eda_ingest::read_tsv;
use eda_model::Country;
use polars::prelude::*;
use tempfile::TempDir;

const COUNTRIES: &str = "ID\tCode\tCountry\n1\tAFG\tAfghanistan\n2\tALB\tAlbania\n";

fn country_table(dir: &TempDir) -> DataFrame {
    let path: PathBuf = dir.path().join("countries.tsv");
    fs::write(&path, COUNTRIES).expect("write countries");
    read_tsv(&path).expect("read countries")
}

#[test]
fn resolves_every_row() {
    let dir = TempDir::new().unwrap();
    let df = country_table(&dir);
    let resolved = CountryResolver::new()
        .from_frame(&df, None, None)
        .unwrap()
        .unwrap();

    let countries = resolved.into_vec();
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0], Country::from_parts(1, "AFG", "Afghanistan"));
    assert_eq!(countries[1].label(), Some("Albania"));
}

#[test]
fn out_of_range_index_is_none() {
    let dir = TempDir::new().unwrap();
    let df = country_table(&dir);
    let resolved = CountryResolver::new().from_frame(&df, None, Some(5)).unwrap();
    assert!(resolved.is_none());
}

#[test]
fn resolves_by_index() {
    let dir = TempDir::new().unwrap();
    let df = country_table(&dir);
    let resolved = CountryResolver::new()
        .from_frame(&df, None, Some(1))
        .unwrap()
        .unwrap();
    assert_eq!(resolved, Resolution::One(Country::from_parts(2, "ALB", "Albania")));
}

#[test]
fn resolves_single_code() {
    let dir = TempDir::new().unwrap();
    let df = country_table(&dir);
    let resolved = CountryResolver::new()
        .search(&df, &SearchTerm::single("AFG"))
        .unwrap()
        .unwrap();

    let country = resolved.first().unwrap();
    assert_eq!(country.id(), Some(1));
    assert_eq!(country.label(), Some("Afghanistan"));
}

#[test]
fn drops_unmatched_terms() {
    let dir = TempDir::new().unwrap();
    let df = country_table(&dir);
    let resolved = CountryResolver::new()
        .search(&df, &SearchTerm::multiple(["AFG", "ZZZ"]))
        .unwrap()
        .unwrap();

    match resolved {
        Resolution::Many(countries) => {
            assert_eq!(countries, vec![Country::from_parts(1, "AFG", "Afghanistan")]);
        }
        Resolution::One(_) => panic!("expected several results"),
    }
}

#[test]
fn no_match_is_none() {
    let dir = TempDir::new().unwrap();
    let df = country_table(&dir);
    let resolver = CountryResolver::new();
    assert!(resolver.search(&df, &SearchTerm::single("ZZZ")).unwrap().is_none());
    assert!(
        resolver
            .search(&df, &SearchTerm::multiple(["ZZZ", "QQQ"]))
            .unwrap()
            .is_none()
    );
}

#[test]
fn get_countries_requires_schema_columns() {
    let df = df! {
        "ID" => [1i64, 2],
        "Country" => ["Afghanistan", "Albania"],
    }
    .unwrap();
    let err = CountryResolver::new().get_countries(&df).unwrap_err();
    assert!(err.is_schema_error());
    match err {
        CoreError::MissingColumns { columns } => assert_eq!(columns, vec!["Code"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn get_countries_from_single_row() {
    let dir = TempDir::new().unwrap();
    let df = country_table(&dir).head(Some(1));
    let countries = CountryResolver::new().get_countries(&df).unwrap().unwrap();
    assert_eq!(countries, vec![Country::from_parts(1, "AFG", "Afghanistan")]);
}

#[test]
fn empty_table_is_none() {
    let df = df! {
        "ID" => Vec::<i64>::new(),
        "Code" => Vec::<&str>::new(),
        "Country" => Vec::<&str>::new(),
    }
    .unwrap();
    let resolver = CountryResolver::new();
    assert!(resolver.from_frame(&df, None, None).unwrap().is_none());
    assert!(resolver.get_countries(&df).unwrap().is_none());
}

#[test]
fn keeps_term_order_across_identifier_kinds() {
    let df = df! {
        "ID" => [1i64, 2, 3],
        "Code" => ["AFG", "ALB", "DZA"],
        "Country" => ["Afghanistan", "Albania", "Algeria"],
    }
    .unwrap();
    let resolved = CountryResolver::new()
        .search(&df, &SearchTerm::multiple(["DZA", "ZZZ", "1", "Albania"]))
        .unwrap()
        .unwrap();

    let ids: Vec<Option<u64>> = resolved.into_vec().iter().map(Country::id).collect();
    assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
}

#[test]
fn blank_search_is_ignored() {
    let dir = TempDir::new().unwrap();
    let df = country_table(&dir);
    let resolver = CountryResolver::new();

    assert!(resolver.search(&df, &SearchTerm::single("")).unwrap().is_none());
    assert!(resolver.search(&df, &SearchTerm::single("   ")).unwrap().is_none());

    let by_index = resolver
        .from_frame(&df, Some(&SearchTerm::single(" ")), Some(1))
        .unwrap()
        .unwrap();
    assert_eq!(by_index.first().and_then(Country::code), Some("ALB"));

    let all = resolver
        .from_frame(&df, Some(&SearchTerm::multiple(["", " "])), None)
        .unwrap()
        .unwrap();
    assert_eq!(all.len(), 2);
}
