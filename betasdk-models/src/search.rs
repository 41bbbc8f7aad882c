//! Microsoft Search answers (`microsoft.graph.search` namespace)

use crate::device_management::DevicePlatformType;
use crate::entity::Entity;
use crate::identity::IdentitySet;
use betasdk_core::{model, wire_enum, Timestamp};

wire_enum! {
    pub enum AnswerState {
        Published => "published",
        Draft => "draft",
        Excluded => "excluded",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model! {
    pub struct AnswerKeyword {
        "keywords" => keywords / set_keywords: Vec<String>,
        "matchSimilarKeywords" => match_similar_keywords / set_match_similar_keywords: bool,
        /// Keywords that always trigger this answer and no other.
        "reservedKeywords" => reserved_keywords / set_reserved_keywords: Vec<String>,
    }
}

model! {
    /// Fields shared by bookmarks, acronyms and Q&As.
    pub struct SearchAnswer: Entity
    [accessors = SearchAnswerDerived]
    {
        "description" => description / set_description: String,
        "displayName" => display_name / set_display_name: String,
        "lastModifiedBy" => last_modified_by / set_last_modified_by: IdentitySet,
        "lastModifiedDateTime" => last_modified_date_time / set_last_modified_date_time: Timestamp,
        "webUrl" => web_url / set_web_url: String,
    }
}

model! {
    pub struct Bookmark: SearchAnswer, Entity
    [odata_type = "#microsoft.graph.search.bookmark"]
    {
        "availabilityEndDateTime" => availability_end_date_time / set_availability_end_date_time: Timestamp,
        "availabilityStartDateTime" => availability_start_date_time / set_availability_start_date_time: Timestamp,
        "categories" => categories / set_categories: Vec<String>,
        "groupIds" => group_ids / set_group_ids: Vec<String>,
        "isSuggested" => is_suggested / set_is_suggested: bool,
        "keywords" => keywords / set_keywords: AnswerKeyword,
        "languageTags" => language_tags / set_language_tags: Vec<String>,
        "platforms" => platforms / set_platforms: Vec<DevicePlatformType>,
        "powerAppIds" => power_app_ids / set_power_app_ids: Vec<String>,
        "state" => state / set_state: AnswerState,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use betasdk_json::{create_from_bytes_as, serialize_to_value};
    use serde_json::json;

    #[test]
    fn test_bookmark_enum_collection() {
        let bookmark: Bookmark = create_from_bytes_as(
            br#"{"displayName":"Benefits","platforms":["iOS","windows10AndLater"],"state":"draft"}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            SearchAnswerDerived::display_name(&bookmark),
            Some(&"Benefits".to_string())
        );
        assert_eq!(
            bookmark.platforms(),
            Some(&vec![DevicePlatformType::IOS, DevicePlatformType::Windows10AndLater])
        );
        assert_eq!(bookmark.state(), Some(&AnswerState::Draft));
    }

    #[test]
    fn test_bookmark_keywords_nest() {
        let mut keywords = AnswerKeyword::new();
        keywords.set_keywords(Some(vec!["hr".to_string(), "perks".to_string()]));
        keywords.set_match_similar_keywords(Some(true));
        let mut bookmark = Bookmark::new();
        bookmark.set_keywords(Some(keywords));

        assert_eq!(
            serialize_to_value(&bookmark).unwrap(),
            json!({
                "@odata.type": "#microsoft.graph.search.bookmark",
                "keywords": { "keywords": ["hr", "perks"], "matchSimilarKeywords": true }
            })
        );
    }
}
