//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique
//! 3. All domains are null-terminated
//! 4. All domains follow the `PURSUIT::*::V1\0` naming convention
//! 5. No raw `PURSUIT::` domain literals in production source outside `hash_domain.rs`

use std::collections::BTreeSet;
use std::path::Path;

use pursuit_kernel::proof::hash_domain::HashDomain;

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        6,
        "expected 6 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
    }
}

#[test]
fn hash_domain_all_null_terminated() {
    for domain in HashDomain::ALL {
        assert!(
            domain.as_bytes().ends_with(&[0]),
            "{domain} is not null-terminated"
        );
    }
}

#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(
            bytes.starts_with(b"PURSUIT::"),
            "{domain} does not start with PURSUIT::"
        );
        assert!(
            bytes.ends_with(b"::V1\0"),
            "{domain} does not end with ::V1\\0"
        );
    }
}

#[test]
fn no_raw_domain_literals_outside_authority() {
    let production_dirs = [
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../kernel/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../search/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../harness/src"),
    ];
    let pattern = "b\"PURSUIT::";
    let authority_file = "hash_domain.rs";
    let mut violations = Vec::new();
    let mut scanned = 0;
    for dir in production_dirs {
        scan_dir(Path::new(dir), &mut |path, text| {
            scanned += 1;
            let is_authority = path.file_name().is_some_and(|n| n == authority_file);
            if !is_authority && text.contains(pattern) {
                violations.push(path.display().to_string());
            }
        });
    }
    assert!(scanned > 0, "no source files scanned");
    assert!(
        violations.is_empty(),
        "raw PURSUIT:: domain literals found outside {authority_file}:\n{}",
        violations.join("\n")
    );
}

fn scan_dir(dir: &Path, visit: &mut dyn FnMut(&Path, &str)) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    let mut paths: Vec<_> = entries.filter_map(Result::ok).map(|e| e.path()).collect();
    paths.sort();
    for path in paths {
        if path.is_dir() {
            scan_dir(&path, visit);
        } else if path.extension().is_some_and(|e| e == "rs") {
            if let Ok(text) = std::fs::read_to_string(&path) {
                visit(&path, &text);
            }
        }
    }
}
