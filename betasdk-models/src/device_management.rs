//! Intune device management types

use crate::entity::Entity;
use betasdk_core::{model, wire_enum, IsoDuration, TimeOnly, Timestamp};

wire_enum! {
    /// State of a remote action on a device.
    pub enum ActionState {
        None => "none",
        Pending => "pending",
        Canceled => "canceled",
        Active => "active",
        Done => "done",
        Failed => "failed",
        NotSupported => "notSupported",
    }
}

wire_enum! {
    pub enum ConfigurationManagerActionDeliveryStatus {
        Unknown => "unknown",
        PendingDelivery => "pendingDelivery",
        DeliveredToConnectorService => "deliveredToConnectorService",
        FailedToDeliverToConnectorService => "failedToDeliverToConnectorService",
        DeliveredToOnPremisesServer => "deliveredToOnPremisesServer",
    }
}

wire_enum! {
    /// Kinds of macOS system extension an administrator can allow.
    pub enum MacOSSystemExtensionType {
        DriverExtensionsAllowed => "driverExtensionsAllowed",
        NetworkExtensionsAllowed => "networkExtensionsAllowed",
        EndpointSecurityExtensionsAllowed => "endpointSecurityExtensionsAllowed",
    }
}

wire_enum! {
    pub enum RunAsAccountType {
        System => "system",
        User => "user",
    }
}

wire_enum! {
    pub enum DevicePlatformType {
        Android => "android",
        AndroidForWork => "androidForWork",
        IOS => "iOS",
        MacOS => "macOS",
        WindowsPhone81 => "windowsPhone81",
        Windows81AndLater => "windows81AndLater",
        Windows10AndLater => "windows10AndLater",
        AndroidWorkProfile => "androidWorkProfile",
        Unknown => "unknown",
        AndroidAOSP => "androidAOSP",
    }
}

model! {
    /// Outcome of a remote action sent to a device.
    pub struct DeviceActionResult
    [accessors = DeviceActionResultDerived]
    {
        "actionName" => action_name / set_action_name: String,
        "actionState" => action_state / set_action_state: ActionState,
        "lastUpdatedDateTime" => last_updated_date_time / set_last_updated_date_time: Timestamp,
        "startDateTime" => start_date_time / set_start_date_time: Timestamp,
    }
}

model! {
    pub struct ConfigurationManagerActionResult: DeviceActionResult
    [odata_type = "#microsoft.graph.configurationManagerActionResult"]
    {
        "actionDeliveryStatus" => action_delivery_status / set_action_delivery_status: ConfigurationManagerActionDeliveryStatus,
        "errorCode" => error_code / set_error_code: i32,
    }
}

model! {
    pub struct MacOSSystemExtension {
        "bundleId" => bundle_id / set_bundle_id: String,
        "teamIdentifier" => team_identifier / set_team_identifier: String,
    }
}

model! {
    /// Extension types allowed for one signing team.
    pub struct MacOSSystemExtensionTypeMapping {
        "allowedTypes" => allowed_types / set_allowed_types: MacOSSystemExtensionType,
        "teamIdentifier" => team_identifier / set_team_identifier: String,
    }
}

model! {
    pub struct DeviceComplianceScript: Entity {
        "createdDateTime" => created_date_time / set_created_date_time: Timestamp,
        "description" => description / set_description: String,
        /// Script body, base64 on the wire.
        "detectionScriptContent" => detection_script_content / set_detection_script_content: Vec<u8>,
        "displayName" => display_name / set_display_name: String,
        "enforceSignatureCheck" => enforce_signature_check / set_enforce_signature_check: bool,
        "lastModifiedDateTime" => last_modified_date_time / set_last_modified_date_time: Timestamp,
        "publisher" => publisher / set_publisher: String,
        "roleScopeTagIds" => role_scope_tag_ids / set_role_scope_tag_ids: Vec<String>,
        "runAs32Bit" => run_as32_bit / set_run_as32_bit: bool,
        "runAsAccount" => run_as_account / set_run_as_account: RunAsAccountType,
        "version" => version / set_version: String,
    }
}

model! {
    /// A group of Microsoft Tunnel servers sharing one public address.
    pub struct MicrosoftTunnelSite: Entity {
        "description" => description / set_description: String,
        "displayName" => display_name / set_display_name: String,
        "internalNetworkProbeUrl" => internal_network_probe_url / set_internal_network_probe_url: String,
        "publicAddress" => public_address / set_public_address: String,
        "roleScopeTagIds" => role_scope_tag_ids / set_role_scope_tag_ids: Vec<String>,
        "upgradeAutomatically" => upgrade_automatically / set_upgrade_automatically: bool,
        "upgradeAvailable" => upgrade_available / set_upgrade_available: bool,
        "upgradeWindowEndTime" => upgrade_window_end_time / set_upgrade_window_end_time: TimeOnly,
        "upgradeWindowStartTime" => upgrade_window_start_time / set_upgrade_window_start_time: TimeOnly,
        "upgradeWindowUtcOffsetInMinutes" => upgrade_window_utc_offset_in_minutes / set_upgrade_window_utc_offset_in_minutes: i32,
    }
}

model! {
    pub struct PrivilegedRoleSettings: Entity {
        "approvalOnElevation" => approval_on_elevation / set_approval_on_elevation: bool,
        "approverIds" => approver_ids / set_approver_ids: Vec<String>,
        "elevationDuration" => elevation_duration / set_elevation_duration: IsoDuration,
        "isMfaOnElevationConfigurable" => is_mfa_on_elevation_configurable / set_is_mfa_on_elevation_configurable: bool,
        "lastGlobalAdmin" => last_global_admin / set_last_global_admin: bool,
        /// The wire key keeps the service's spelling.
        "maxElavationDuration" => max_elevation_duration / set_max_elevation_duration: IsoDuration,
        "mfaOnElevation" => mfa_on_elevation / set_mfa_on_elevation: bool,
        "minElevationDuration" => min_elevation_duration / set_min_elevation_duration: IsoDuration,
        "notificationToUserOnElevation" => notification_to_user_on_elevation / set_notification_to_user_on_elevation: bool,
        "ticketingInfoOnElevation" => ticketing_info_on_elevation / set_ticketing_info_on_elevation: bool,
    }
}
