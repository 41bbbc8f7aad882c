//! Payload scenarios against canned service responses

use betasdk_core::{Parsable, WireEnum};
use betasdk_json::{create_from_bytes, create_from_bytes_as, serialize_to_bytes, serialize_to_value};
use betasdk_models::*;
use betasdk_test_utils::fixtures::{
    example_browser_site, populated_site_page, BROWSER_SITE_JSON, SITE_PAGE_JSON,
};
use serde_json::json;

#[test]
fn test_minimal_browser_site_round_trip() {
    let site = example_browser_site();
    let bytes = serialize_to_bytes(&site).unwrap();
    let back = create_from_bytes_as::<BrowserSite>(&bytes).unwrap().unwrap();

    assert_eq!(back.web_url(), Some(&"https://example.com".to_string()));
    assert_eq!(back.allow_redirect(), Some(&true));
    assert_eq!(back.comment(), None);
    assert_eq!(back.compatibility_mode(), None);
    assert_eq!(back.created_date_time(), None);
    assert_eq!(back.deleted_date_time(), None);
    assert_eq!(back.history(), None);
    assert_eq!(back.last_modified_by(), None);
    assert_eq!(back.last_modified_date_time(), None);
    assert_eq!(back.merge_type(), None);
    assert_eq!(back.status(), None);
    assert_eq!(back.target_environment(), None);
    assert_eq!(EntityDerived::id(&back), None);
    assert!(back.additional_data().map_or(true, |extra| extra.is_empty()));
    assert_eq!(back, site);
}

#[test]
fn test_minimal_browser_site_payload_shape() {
    assert_eq!(
        serialize_to_value(&example_browser_site()).unwrap(),
        json!({
            "allowRedirect": true,
            "webUrl": "https://example.com"
        })
    );
}

#[test]
fn test_empty_member_name_survives_registry_round_trip() {
    let model = create_from_bytes(
        br#"{"webUrl":"https://a","":1}"#,
        create_entity_from_discriminator_value,
    )
    .unwrap()
    .unwrap();
    assert_eq!(model.type_name(), "Entity");
    let bytes = serialize_to_bytes(model.as_ref()).unwrap();
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&bytes).unwrap(),
        json!({ "webUrl": "https://a", "": 1 })
    );
}

#[test]
fn test_system_extension_type_parse() {
    let parsed: MacOSSystemExtensionType = "driverExtensionsAllowed".parse().unwrap();
    assert_eq!(parsed, MacOSSystemExtensionType::DriverExtensionsAllowed);
    assert_eq!(parsed.to_string(), "driverExtensionsAllowed");

    let err = "bogus".parse::<MacOSSystemExtensionType>().unwrap_err();
    assert!(err.to_string().contains("MacOSSystemExtensionType"));
    assert!(err.to_string().contains("bogus"));
}

#[test]
fn test_service_browser_site_payload() {
    let site = create_from_bytes_as::<BrowserSite>(BROWSER_SITE_JSON.as_bytes())
        .unwrap()
        .unwrap();

    assert_eq!(
        site.compatibility_mode(),
        Some(&BrowserSiteCompatibilityMode::InternetExplorer11)
    );
    assert_eq!(site.status(), Some(&BrowserSiteStatus::Published));
    assert_eq!(site.merge_type(), Some(&BrowserSiteMergeType::Default));

    let history = site.history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].merge_type(), Some(&BrowserSiteMergeType::NoMerge));
    assert_eq!(
        history[0].target_environment(),
        Some(&BrowserSiteTargetEnvironment::InternetExplorerMode)
    );

    let user = site.last_modified_by().and_then(|by| by.user()).unwrap();
    assert_eq!(user.display_name(), Some(&"Site Admin".to_string()));

    let created = site.created_date_time().unwrap();
    assert_eq!(created.to_rfc3339(), "2023-06-01T08:15:00+00:00");
}

#[test]
fn test_service_site_page_payload_through_registry() {
    let model = create_from_bytes(SITE_PAGE_JSON.as_bytes(), create_entity_from_discriminator_value)
        .unwrap()
        .unwrap();
    assert_eq!(model.odata_type(), Some("#microsoft.graph.sitePage"));
    assert_eq!(model.type_name(), "SitePage");
    let page = model.downcast_ref::<SitePage>().unwrap();

    assert_eq!(page.promotion_kind(), Some(&PagePromotionType::NewsPost));
    assert_eq!(BaseItemDerived::name(page), Some(&"welcome.aspx".to_string()));
    assert_eq!(
        page.reactions().and_then(|r| r.like_count()),
        Some(&12)
    );
    assert_eq!(page.reactions().and_then(|r| r.share_count()), None);

    let parts = page.web_parts().unwrap();
    assert_eq!(parts.len(), 2);
    assert!(matches!(&parts[0], WebPart::Text(_)));
    match &parts[1] {
        WebPart::Standard(standard) => {
            let data = standard.data().unwrap();
            assert_eq!(data.title(), Some(&"Quick links".to_string()));
            assert_eq!(data.data_version(), Some(&"1.0".to_string()));
        }
        other => panic!("expected a standard web part, got {:?}", other),
    }
    assert_eq!(parts[1].id(), Some(&"w2".to_string()));
}

#[test]
fn test_populated_site_page_round_trip() {
    let page = populated_site_page();
    let bytes = serialize_to_bytes(&page).unwrap();
    let back = create_from_bytes_as::<SitePage>(&bytes).unwrap().unwrap();
    assert_eq!(back, page);
    assert_eq!(back.web_parts().map(Vec::len), Some(32));
}

#[test]
fn test_attack_simulation_typo_token_on_the_wire() {
    let mut op = AttackSimulationOperation::new();
    op.set_operation_type(Some(AttackSimulationOperationType::CreateSimulation));
    LongRunningOperationDerived::set_status(&mut op, Some(LongRunningOperationStatus::Running));

    let value = serialize_to_value(&op).unwrap();
    assert_eq!(value["type"], json!("createSimualation"));
    assert_eq!(value["status"], json!("running"));
    assert_eq!(
        AttackSimulationOperationType::CreateSimulation.as_wire_str(),
        "createSimualation"
    );
}

#[test]
fn test_null_payload_yields_none() {
    assert!(create_from_bytes_as::<BrowserSite>(b"null").unwrap().is_none());
    assert!(create_from_bytes(b"null", create_entity_from_discriminator_value)
        .unwrap()
        .is_none());
}

#[test]
fn test_malformed_payload_is_an_error() {
    assert!(create_from_bytes_as::<BrowserSite>(b"{\"webUrl\":").is_err());
    assert!(create_from_bytes_as::<BrowserSite>(br#"{"allowRedirect":"yes"}"#).is_err());
}
