//! Behavioral tests for color theming

use crate::catalog::Catalog;
use crate::color::{ColorBundle, ColorTag, resolve_bundle};
use crate::config::LookupPolicy;

#[test]
fn given_all_six_tags_when_mapped_then_every_bundle_complete() {
    assert_eq!(ColorTag::ALL.len(), 6);
    for tag in ColorTag::ALL {
        let bundle = tag.bundle();
        assert!(bundle.is_complete(), "{tag} has an empty role");
    }
}

#[test]
fn given_tag_when_mapped_twice_then_same_bundle() {
    for tag in ColorTag::ALL {
        assert!(std::ptr::eq(tag.bundle(), tag.bundle()));
    }
}

#[test]
fn given_builtin_catalog_when_rendering_then_every_color_resolves() {
    for page in Catalog::builtin().pages() {
        for topic in page.topics() {
            assert!(topic.color.bundle().is_complete());
            for section in &topic.overlay.sections {
                assert!(section.color.bundle().is_complete());
            }
        }
    }
}

#[test]
fn given_tag_name_from_display_when_resolved_strictly_then_round_trips() {
    for tag in ColorTag::ALL {
        let bundle = resolve_bundle(&tag.to_string(), LookupPolicy::Strict).unwrap();
        assert_eq!(bundle, tag.bundle());
    }
}

#[test]
fn given_unknown_name_when_resolved_with_fallback_then_neutral() {
    let bundle = resolve_bundle("magenta", LookupPolicy::Fallback).unwrap();
    assert_eq!(bundle, &ColorBundle::NEUTRAL);
}

#[test]
fn given_tag_when_serialized_then_uses_lowercase() {
    let json = serde_json::to_string(&ColorTag::Orange).expect("serialization should work");
    assert_eq!(json, "\"orange\"");
}
