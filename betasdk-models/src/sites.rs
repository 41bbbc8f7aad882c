//! Site pages and their building blocks

use crate::entity::Entity;
use crate::identity::{BaseItem, IdentitySet};
use betasdk_core::{
    factory_for, model, wire_enum, DiscriminatorRegistry, Parsable, ParseNode, ParseNodeExt,
    SerializationError, SerializationResult, SerializationWriter, SerializationWriterExt,
    WireElement, WireValue,
};
use std::sync::LazyLock;

wire_enum! {
    pub enum PageLayoutType {
        MicrosoftReserved => "microsoftReserved",
        Article => "article",
        Home => "home",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    pub enum PagePromotionType {
        MicrosoftReserved => "microsoftReserved",
        Page => "page",
        NewsPost => "newsPost",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    /// How the title area arranges its image and text.
    pub enum TitleAreaLayoutType {
        ImageAndTitle => "imageAndTitle",
        Plain => "plain",
        ColorBlock => "colorBlock",
        Overlap => "overlap",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    pub enum TitleAreaTextAlignmentType {
        Left => "left",
        Center => "center",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model! {
    pub struct MetaDataKeyStringPair {
        "key" => key / set_key: String,
        "value" => value / set_value: String,
    }
}

model! {
    /// Content the service renders and indexes on behalf of a web part.
    pub struct ServerProcessedContent {
        "componentDependencies" => component_dependencies / set_component_dependencies: Vec<MetaDataKeyStringPair>,
        "htmlStrings" => html_strings / set_html_strings: Vec<MetaDataKeyStringPair>,
        "imageSources" => image_sources / set_image_sources: Vec<MetaDataKeyStringPair>,
        "links" => links / set_links: Vec<MetaDataKeyStringPair>,
        "searchablePlainTexts" => searchable_plain_texts / set_searchable_plain_texts: Vec<MetaDataKeyStringPair>,
    }
}

model! {
    pub struct TitleArea {
        "alternativeText" => alternative_text / set_alternative_text: String,
        "enableGradientEffect" => enable_gradient_effect / set_enable_gradient_effect: bool,
        "imageWebUrl" => image_web_url / set_image_web_url: String,
        "layout" => layout / set_layout: TitleAreaLayoutType,
        "serverProcessedContent" => server_processed_content / set_server_processed_content: ServerProcessedContent,
        "showAuthor" => show_author / set_show_author: bool,
        "showPublishedDate" => show_published_date / set_show_published_date: bool,
        "showTextBlockAboveTitle" => show_text_block_above_title / set_show_text_block_above_title: bool,
        "textAboveTitle" => text_above_title / set_text_above_title: String,
        "textAlignment" => text_alignment / set_text_alignment: TitleAreaTextAlignmentType,
    }
}

model! {
    /// Publishing state of a page.
    pub struct PublicationFacet {
        "checkedOutBy" => checked_out_by / set_checked_out_by: IdentitySet,
        /// `published` or `checkout`.
        "level" => level / set_level: String,
        "versionId" => version_id / set_version_id: String,
    }
}

model! {
    pub struct ReactionsFacet {
        "commentCount" => comment_count / set_comment_count: i32,
        "likeCount" => like_count / set_like_count: i32,
        "shareCount" => share_count / set_share_count: i32,
    }
}

model! {
    pub struct ContentTypeInfo {
        "id" => id / set_id: String,
        "name" => name / set_name: String,
    }
}

model! {
    pub struct WebPartData {
        "dataVersion" => data_version / set_data_version: String,
        "description" => description / set_description: String,
        "serverProcessedContent" => server_processed_content / set_server_processed_content: ServerProcessedContent,
        "title" => title / set_title: String,
    }
}

model! {
    /// A web part the client has no dedicated type for.
    pub struct WebPartBase: Entity {}
}

model! {
    pub struct TextWebPart: WebPartBase, Entity
    [odata_type = "#microsoft.graph.textWebPart"]
    {
        "innerHtml" => inner_html / set_inner_html: String,
    }
}

model! {
    pub struct StandardWebPart: WebPartBase, Entity
    [odata_type = "#microsoft.graph.standardWebPart"]
    {
        "data" => data / set_data: WebPartData,
        /// Id of the web part definition that renders this instance.
        "webPartType" => web_part_type / set_web_part_type: String,
    }
}

/// One web part of a page, resolved from its `@odata.type`.
#[derive(Debug, Clone, PartialEq)]
pub enum WebPart {
    Text(TextWebPart),
    Standard(StandardWebPart),
    Base(WebPartBase),
}

static WEB_PART_REGISTRY: LazyLock<DiscriminatorRegistry> = LazyLock::new(|| {
    DiscriminatorRegistry::new(factory_for::<WebPartBase>)
        .with("#microsoft.graph.textWebPart", factory_for::<TextWebPart>)
        .with("#microsoft.graph.standardWebPart", factory_for::<StandardWebPart>)
});

/// Registry behind [`WebPart`] reads.
pub fn web_part_registry() -> &'static DiscriminatorRegistry {
    &WEB_PART_REGISTRY
}

pub fn create_web_part_from_discriminator_value(
    node: &dyn ParseNode,
) -> SerializationResult<Box<dyn Parsable>> {
    web_part_registry().create(node)
}

impl WebPart {
    pub fn as_parsable(&self) -> &dyn Parsable {
        match self {
            WebPart::Text(part) => part,
            WebPart::Standard(part) => part,
            WebPart::Base(part) => part,
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.as_parsable().odata_type()
    }

    pub fn id(&self) -> Option<&String> {
        self.entity().id()
    }

    fn entity(&self) -> &Entity {
        match self {
            WebPart::Text(part) => AsRef::<Entity>::as_ref(part),
            WebPart::Standard(part) => AsRef::<Entity>::as_ref(part),
            WebPart::Base(part) => AsRef::<Entity>::as_ref(part),
        }
    }

    /// Narrow a model built by [`create_web_part_from_discriminator_value`].
    pub fn from_parsable(model: Box<dyn Parsable>) -> SerializationResult<Self> {
        if model.is::<TextWebPart>() {
            return downcast_into(model, WebPart::Text);
        }
        if model.is::<StandardWebPart>() {
            return downcast_into(model, WebPart::Standard);
        }
        downcast_into(model, WebPart::Base)
    }
}

fn downcast_into<T: Parsable>(
    model: Box<dyn Parsable>,
    wrap: fn(T) -> WebPart,
) -> SerializationResult<WebPart> {
    let found = format!("{:?}", model.odata_type());
    model
        .downcast::<T>()
        .map(|part| wrap(*part))
        .ok_or_else(|| SerializationError::type_mismatch("webPart", found))
}

impl From<TextWebPart> for WebPart {
    fn from(part: TextWebPart) -> Self {
        WebPart::Text(part)
    }
}

impl From<StandardWebPart> for WebPart {
    fn from(part: StandardWebPart) -> Self {
        WebPart::Standard(part)
    }
}

impl From<WebPartBase> for WebPart {
    fn from(part: WebPartBase) -> Self {
        WebPart::Base(part)
    }
}

impl WireValue for WebPart {
    fn read(node: &dyn ParseNode) -> SerializationResult<Option<Self>> {
        match node.object_value(create_web_part_from_discriminator_value)? {
            Some(model) => WebPart::from_parsable(model).map(Some),
            None => Ok(None),
        }
    }

    fn write(
        writer: &mut dyn SerializationWriter,
        key: &str,
        value: Option<&Self>,
    ) -> SerializationResult<()> {
        writer.write_object_value(key, value.map(WebPart::as_parsable))
    }
}

impl WireElement for WebPart {
    fn read_collection(node: &dyn ParseNode) -> SerializationResult<Option<Vec<Self>>> {
        let Some(models) = node.collection_of_object_values(create_web_part_from_discriminator_value)?
        else {
            return Ok(None);
        };
        models
            .into_iter()
            .map(WebPart::from_parsable)
            .collect::<SerializationResult<Vec<_>>>()
            .map(Some)
    }

    fn write_collection(
        writer: &mut dyn SerializationWriter,
        key: &str,
        values: Option<&[Self]>,
    ) -> SerializationResult<()> {
        let Some(values) = values else {
            return Ok(());
        };
        writer.start_collection(key)?;
        for part in values {
            writer.write_object_value("", Some(part.as_parsable()))?;
        }
        writer.end_collection()
    }
}

model! {
    /// A modern SharePoint page.
    pub struct SitePage: BaseItem, Entity
    [odata_type = "#microsoft.graph.sitePage"]
    {
        "contentType" => content_type / set_content_type: ContentTypeInfo,
        "pageLayout" => page_layout / set_page_layout: PageLayoutType,
        "promotionKind" => promotion_kind / set_promotion_kind: PagePromotionType,
        "publishingState" => publishing_state / set_publishing_state: PublicationFacet,
        "reactions" => reactions / set_reactions: ReactionsFacet,
        "showComments" => show_comments / set_show_comments: bool,
        "showRecommendedPages" => show_recommended_pages / set_show_recommended_pages: bool,
        "thumbnailWebUrl" => thumbnail_web_url / set_thumbnail_web_url: String,
        "title" => title / set_title: String,
        "titleArea" => title_area / set_title_area: TitleArea,
        /// In page order.
        "webParts" => web_parts / set_web_parts: Vec<WebPart>,
    }
}
