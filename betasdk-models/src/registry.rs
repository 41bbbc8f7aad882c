//! Discriminator registries for the polymorphic bases

use crate::browser::BrowserSite;
use crate::device_management::{
    ConfigurationManagerActionResult, DeviceActionResult, DeviceComplianceScript,
    MicrosoftTunnelSite, PrivilegedRoleSettings,
};
use crate::entity::Entity;
use crate::financials::CustomerPayment;
use crate::identity::BaseItem;
use crate::operations::{AttackSimulationOperation, LongRunningOperation};
use crate::reports::{Office365ActiveUserCounts, RelyingPartyDetailedSummary};
use crate::search::{Bookmark, SearchAnswer};
use crate::sites::{SitePage, StandardWebPart, TextWebPart, WebPartBase};
use betasdk_core::{factory_for, DiscriminatorRegistry, Parsable, ParseNode, SerializationResult};
use std::sync::LazyLock;

static ENTITY_REGISTRY: LazyLock<DiscriminatorRegistry> = LazyLock::new(|| {
    DiscriminatorRegistry::new(factory_for::<Entity>)
        .with("#microsoft.graph.attackSimulationOperation", factory_for::<AttackSimulationOperation>)
        .with("#microsoft.graph.baseItem", factory_for::<BaseItem>)
        .with("#microsoft.graph.browserSite", factory_for::<BrowserSite>)
        .with("#microsoft.graph.customerPayment", factory_for::<CustomerPayment>)
        .with("#microsoft.graph.deviceComplianceScript", factory_for::<DeviceComplianceScript>)
        .with("#microsoft.graph.longRunningOperation", factory_for::<LongRunningOperation>)
        .with("#microsoft.graph.microsoftTunnelSite", factory_for::<MicrosoftTunnelSite>)
        .with("#microsoft.graph.office365ActiveUserCounts", factory_for::<Office365ActiveUserCounts>)
        .with("#microsoft.graph.privilegedRoleSettings", factory_for::<PrivilegedRoleSettings>)
        .with("#microsoft.graph.relyingPartyDetailedSummary", factory_for::<RelyingPartyDetailedSummary>)
        .with("#microsoft.graph.search.bookmark", factory_for::<Bookmark>)
        .with("#microsoft.graph.search.searchAnswer", factory_for::<SearchAnswer>)
        .with("#microsoft.graph.sitePage", factory_for::<SitePage>)
        .with("#microsoft.graph.standardWebPart", factory_for::<StandardWebPart>)
        .with("#microsoft.graph.textWebPart", factory_for::<TextWebPart>)
        .with("#microsoft.graph.webPart", factory_for::<WebPartBase>)
});

static DEVICE_ACTION_RESULT_REGISTRY: LazyLock<DiscriminatorRegistry> = LazyLock::new(|| {
    DiscriminatorRegistry::new(factory_for::<DeviceActionResult>).with(
        "#microsoft.graph.configurationManagerActionResult",
        factory_for::<ConfigurationManagerActionResult>,
    )
});

/// Every entity type of the crate, keyed by `@odata.type`.
pub fn entity_registry() -> &'static DiscriminatorRegistry {
    &ENTITY_REGISTRY
}

/// Build the entity type `node` names, or a plain [`Entity`] when the
/// discriminator is missing or unknown. The instance is not yet populated.
pub fn create_entity_from_discriminator_value(
    node: &dyn ParseNode,
) -> SerializationResult<Box<dyn Parsable>> {
    entity_registry().create(node)
}

pub fn device_action_result_registry() -> &'static DiscriminatorRegistry {
    &DEVICE_ACTION_RESULT_REGISTRY
}

pub fn create_device_action_result_from_discriminator_value(
    node: &dyn ParseNode,
) -> SerializationResult<Box<dyn Parsable>> {
    device_action_result_registry().create(node)
}
