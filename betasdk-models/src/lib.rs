//! betasdk-models - Model Types
//!
//! Entities, complex types and enums of the beta SDK. Every type is
//! declared with [`model!`](betasdk_core::model) or
//! [`wire_enum!`](betasdk_core::wire_enum) except [`Entity`], the root of the
//! entity hierarchy, and [`WebPart`], a polymorphic value resolved from its
//! `@odata.type`.
//!
//! ```ignore
//! use betasdk_json::{create_from_bytes_as, serialize_to_bytes};
//! use betasdk_models::BrowserSite;
//!
//! let mut site = BrowserSite::new();
//! site.set_web_url(Some("https://example.com".to_string()));
//! let bytes = serialize_to_bytes(&site)?;
//! let back: BrowserSite = create_from_bytes_as(&bytes)?.unwrap_or_default();
//! ```

pub mod browser;
pub mod device_management;
pub mod entity;
pub mod financials;
pub mod identity;
pub mod operations;
pub mod registry;
pub mod reports;
pub mod search;
pub mod sites;

pub use browser::{
    BrowserSite, BrowserSiteCompatibilityMode, BrowserSiteHistory, BrowserSiteMergeType,
    BrowserSiteStatus, BrowserSiteTargetEnvironment,
};
pub use device_management::{
    ActionState, ConfigurationManagerActionDeliveryStatus, ConfigurationManagerActionResult,
    DeviceActionResult, DeviceActionResultDerived, DeviceComplianceScript, DevicePlatformType,
    MacOSSystemExtension, MacOSSystemExtensionType, MacOSSystemExtensionTypeMapping,
    MicrosoftTunnelSite, PrivilegedRoleSettings, RunAsAccountType,
};
pub use entity::{Entity, EntityDerived};
pub use financials::CustomerPayment;
pub use identity::{BaseItem, BaseItemDerived, Identity, IdentitySet, KeyValuePair};
pub use operations::{
    AttackSimulationOperation, AttackSimulationOperationType, LongRunningOperation,
    LongRunningOperationDerived, LongRunningOperationStatus,
};
pub use registry::{
    create_device_action_result_from_discriminator_value, create_entity_from_discriminator_value,
    device_action_result_registry, entity_registry,
};
pub use reports::{MigrationStatus, Office365ActiveUserCounts, RelyingPartyDetailedSummary};
pub use sites::{
    ContentTypeInfo, MetaDataKeyStringPair, PageLayoutType, PagePromotionType, PublicationFacet,
    ReactionsFacet, ServerProcessedContent, SitePage, StandardWebPart, TextWebPart, TitleArea,
    TitleAreaLayoutType, TitleAreaTextAlignmentType, WebPart, WebPartBase, WebPartData,
    create_web_part_from_discriminator_value, web_part_registry,
};
