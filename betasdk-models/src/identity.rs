//! Identities and the shared `BaseItem` entity

use crate::entity::Entity;
use betasdk_core::{model, Timestamp};

model! {
    /// An actor: a user, a device or an application.
    pub struct Identity {
        "displayName" => display_name / set_display_name: String,
        "id" => id / set_id: String,
    }
}

model! {
    /// The identities involved in an action. Any of them may be unset.
    pub struct IdentitySet {
        "application" => application / set_application: Identity,
        "device" => device / set_device: Identity,
        "user" => user / set_user: Identity,
    }
}

model! {
    pub struct KeyValuePair {
        "name" => name / set_name: String,
        "value" => value / set_value: String,
    }
}

model! {
    /// Common fields of drive items, lists, sites and pages.
    pub struct BaseItem: Entity
    [accessors = BaseItemDerived]
    {
        "createdBy" => created_by / set_created_by: IdentitySet,
        "createdDateTime" => created_date_time / set_created_date_time: Timestamp,
        "description" => description / set_description: String,
        /// Opaque version tag of the item.
        "eTag" => e_tag / set_e_tag: String,
        "lastModifiedBy" => last_modified_by / set_last_modified_by: IdentitySet,
        "lastModifiedDateTime" => last_modified_date_time / set_last_modified_date_time: Timestamp,
        "name" => name / set_name: String,
        "webUrl" => web_url / set_web_url: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityDerived;
    use betasdk_core::Parsable;
    use betasdk_json::{create_from_bytes_as, serialize_to_value};
    use serde_json::json;

    #[test]
    fn test_identity_set_nests_identities() {
        let mut user = Identity::new();
        user.set_display_name(Some("Ada".to_string()));
        user.set_id(Some("u1".to_string()));
        let mut set = IdentitySet::new();
        set.set_user(Some(user));

        assert_eq!(
            serialize_to_value(&set).unwrap(),
            json!({ "user": { "displayName": "Ada", "id": "u1" } })
        );
    }

    #[test]
    fn test_base_item_reads_entity_keys_through_embedding() {
        let item: BaseItem = create_from_bytes_as(
            br#"{"id":"b1","name":"Home","eTag":"\"1\"","createdBy":{"user":{"id":"u"}}}"#,
        )
        .unwrap()
        .unwrap();

        assert_eq!(EntityDerived::id(&item), Some(&"b1".to_string()));
        assert_eq!(item.name(), Some(&"Home".to_string()));
        assert_eq!(item.e_tag(), Some(&"\"1\"".to_string()));
        let creator = item.created_by().and_then(IdentitySet::user).unwrap();
        assert_eq!(creator.id(), Some(&"u".to_string()));
        assert!(item.additional_data().unwrap().is_empty());
    }
}
