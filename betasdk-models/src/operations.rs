//! Long-running operations

use crate::entity::Entity;
use betasdk_core::{model, wire_enum, Timestamp};

wire_enum! {
    pub enum LongRunningOperationStatus {
        NotStarted => "notStarted",
        Running => "running",
        Succeeded => "succeeded",
        Failed => "failed",
        Skipped => "skipped",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    pub enum AttackSimulationOperationType {
        /// The service token carries the misspelling.
        CreateSimulation => "createSimualation",
        UpdateSimulation => "updateSimulation",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model! {
    /// Status of an operation the service runs asynchronously.
    pub struct LongRunningOperation: Entity
    [accessors = LongRunningOperationDerived]
    {
        "createdDateTime" => created_date_time / set_created_date_time: Timestamp,
        "lastActionDateTime" => last_action_date_time / set_last_action_date_time: Timestamp,
        /// Where to poll for the operation's result.
        "resourceLocation" => resource_location / set_resource_location: String,
        "status" => status / set_status: LongRunningOperationStatus,
        "statusDetail" => status_detail / set_status_detail: String,
    }
}

model! {
    pub struct AttackSimulationOperation: LongRunningOperation, Entity
    [odata_type = "#microsoft.graph.attackSimulationOperation"]
    {
        "percentageCompleted" => percentage_completed / set_percentage_completed: i32,
        "tenantId" => tenant_id / set_tenant_id: String,
        "type" => operation_type / set_operation_type: AttackSimulationOperationType,
    }
}
