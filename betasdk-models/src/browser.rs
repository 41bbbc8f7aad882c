//! Enterprise-mode site list entries

use crate::entity::Entity;
use crate::identity::IdentitySet;
use betasdk_core::{model, wire_enum, Timestamp};

wire_enum! {
    /// Engine a site opens with in Microsoft Edge.
    pub enum BrowserSiteCompatibilityMode {
        Default => "default",
        InternetExplorer8Enterprise => "internetExplorer8Enterprise",
        InternetExplorer7Enterprise => "internetExplorer7Enterprise",
        InternetExplorer11 => "internetExplorer11",
        InternetExplorer10 => "internetExplorer10",
        InternetExplorer9 => "internetExplorer9",
        InternetExplorer8 => "internetExplorer8",
        InternetExplorer7 => "internetExplorer7",
        InternetExplorer5 => "internetExplorer5",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    pub enum BrowserSiteMergeType {
        NoMerge => "noMerge",
        Default => "default",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    pub enum BrowserSiteStatus {
        Published => "published",
        PendingAdd => "pendingAdd",
        PendingEdit => "pendingEdit",
        PendingDelete => "pendingDelete",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    pub enum BrowserSiteTargetEnvironment {
        InternetExplorerMode => "internetExplorerMode",
        InternetExplorer11 => "internetExplorer11",
        MicrosoftEdge => "microsoftEdge",
        Configurable => "configurable",
        None => "none",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model! {
    /// A published revision of a [`BrowserSite`].
    pub struct BrowserSiteHistory {
        "allowRedirect" => allow_redirect / set_allow_redirect: bool,
        "comment" => comment / set_comment: String,
        "compatibilityMode" => compatibility_mode / set_compatibility_mode: BrowserSiteCompatibilityMode,
        "lastModifiedBy" => last_modified_by / set_last_modified_by: IdentitySet,
        "mergeType" => merge_type / set_merge_type: BrowserSiteMergeType,
        "publishedDateTime" => published_date_time / set_published_date_time: Timestamp,
        "targetEnvironment" => target_environment / set_target_environment: BrowserSiteTargetEnvironment,
    }
}

model! {
    /// One site of an Internet Explorer mode site list.
    pub struct BrowserSite: Entity {
        /// Whether the site may redirect to a site in a different engine.
        "allowRedirect" => allow_redirect / set_allow_redirect: bool,
        "comment" => comment / set_comment: String,
        "compatibilityMode" => compatibility_mode / set_compatibility_mode: BrowserSiteCompatibilityMode,
        "createdDateTime" => created_date_time / set_created_date_time: Timestamp,
        /// Set once the deletion is published.
        "deletedDateTime" => deleted_date_time / set_deleted_date_time: Timestamp,
        "history" => history / set_history: Vec<BrowserSiteHistory>,
        "lastModifiedBy" => last_modified_by / set_last_modified_by: IdentitySet,
        "lastModifiedDateTime" => last_modified_date_time / set_last_modified_date_time: Timestamp,
        "mergeType" => merge_type / set_merge_type: BrowserSiteMergeType,
        "status" => status / set_status: BrowserSiteStatus,
        "targetEnvironment" => target_environment / set_target_environment: BrowserSiteTargetEnvironment,
        "webUrl" => web_url / set_web_url: String,
    }
}
