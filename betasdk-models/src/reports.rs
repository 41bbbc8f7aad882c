//! Usage and sign-in reports

use crate::entity::Entity;
use crate::identity::KeyValuePair;
use betasdk_core::{model, wire_enum, DateOnly};

wire_enum! {
    /// Readiness of an AD FS relying party for migration to Entra ID.
    pub enum MigrationStatus {
        Ready => "ready",
        NeedsReview => "needsReview",
        AdditionalStepsRequired => "additionalStepsRequired",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model! {
    pub struct Office365ActiveUserCounts: Entity {
        "exchange" => exchange / set_exchange: i64,
        "office365" => office365 / set_office365: i64,
        "oneDrive" => one_drive / set_one_drive: i64,
        "reportDate" => report_date / set_report_date: DateOnly,
        /// Length of the period the counts cover, e.g. `7`.
        "reportPeriod" => report_period / set_report_period: String,
        "reportRefreshDate" => report_refresh_date / set_report_refresh_date: DateOnly,
        "sharePoint" => share_point / set_share_point: i64,
        "skypeForBusiness" => skype_for_business / set_skype_for_business: i64,
        "teams" => teams / set_teams: i64,
        "yammer" => yammer / set_yammer: i64,
    }
}

model! {
    pub struct RelyingPartyDetailedSummary: Entity {
        "failedSignInCount" => failed_sign_in_count / set_failed_sign_in_count: i64,
        "migrationStatus" => migration_status / set_migration_status: MigrationStatus,
        "migrationValidationDetails" => migration_validation_details / set_migration_validation_details: Vec<KeyValuePair>,
        "relyingPartyId" => relying_party_id / set_relying_party_id: String,
        "relyingPartyName" => relying_party_name / set_relying_party_name: String,
        "replyUrls" => reply_urls / set_reply_urls: Vec<String>,
        "serviceId" => service_id / set_service_id: String,
        /// Between 0 and 1.
        "signInSuccessRate" => sign_in_success_rate / set_sign_in_success_rate: f64,
        "successfulSignInCount" => successful_sign_in_count / set_successful_sign_in_count: i64,
        "totalSignInCount" => total_sign_in_count / set_total_sign_in_count: i64,
        "uniqueUserCount" => unique_user_count / set_unique_user_count: i64,
    }
}
