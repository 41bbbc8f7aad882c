//! betasdk Test Utilities
//!
//! Shared test infrastructure for the workspace:
//! - Proptest generators for every model and enum
//! - Canned JSON payloads and pre-built models

pub use betasdk_core::{
    DateOnly, IsoDuration, Parsable, SerializationError, SerializationResult, TimeOnly, Timestamp,
    WireEnum,
};
pub use betasdk_models::{
    AttackSimulationOperation, BrowserSite, BrowserSiteHistory, ConfigurationManagerActionResult,
    CustomerPayment, DeviceComplianceScript, Entity, Identity, IdentitySet, KeyValuePair,
    MicrosoftTunnelSite, Office365ActiveUserCounts, PrivilegedRoleSettings,
    RelyingPartyDetailedSummary, SitePage, WebPart,
};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for scalars, enums and models.
    //!
    //! Every strategy produces values that survive a JSON round trip
    //! unchanged: timestamps carry millisecond precision, floats stay finite.

    use super::*;
    use betasdk_models::search::{AnswerKeyword, AnswerState, Bookmark, SearchAnswerDerived};
    use betasdk_models::{
        ActionState, AttackSimulationOperationType, BaseItemDerived, BrowserSiteCompatibilityMode,
        BrowserSiteMergeType, BrowserSiteStatus, BrowserSiteTargetEnvironment,
        ConfigurationManagerActionDeliveryStatus, ContentTypeInfo, DeviceActionResultDerived,
        DevicePlatformType, EntityDerived, LongRunningOperationDerived,
        LongRunningOperationStatus, MetaDataKeyStringPair, MigrationStatus, PageLayoutType,
        PagePromotionType, PublicationFacet, ReactionsFacet, RunAsAccountType,
        ServerProcessedContent, StandardWebPart, TextWebPart, TitleArea, TitleAreaLayoutType,
        TitleAreaTextAlignmentType, WebPartBase, WebPartData,
    };
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
    use proptest::collection::vec;
    use proptest::option::of as opt;
    use proptest::prelude::*;
    use std::fmt::Debug;
    use uuid::Uuid;

    // === Scalar Generators ===

    /// Short printable text.
    pub fn arb_text() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 ._-]{0,16}"
    }

    pub fn arb_web_url() -> impl Strategy<Value = String> {
        "[a-z]{1,10}".prop_map(|host| format!("https://{}.example.com/", host))
    }

    pub fn arb_uuid() -> impl Strategy<Value = Uuid> {
        any::<[u8; 16]>().prop_map(Uuid::from_bytes)
    }

    /// Timestamps between 2020 and 2030 with millisecond precision and a
    /// quarter-hour offset.
    pub fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
        (1577836800i64..1893456000i64, 0u32..1000, -48i32..=56).prop_filter_map(
            "offset or instant out of range",
            |(secs, millis, quarters)| {
                let offset = FixedOffset::east_opt(quarters * 900)?;
                let utc = DateTime::from_timestamp(secs, millis * 1_000_000)?;
                Some(utc.with_timezone(&offset))
            },
        )
    }

    pub fn arb_date_only() -> impl Strategy<Value = DateOnly> {
        (2000i32..2100, 1u32..=12, 1u32..=28)
            .prop_filter_map("invalid date", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
    }

    pub fn arb_time_only() -> impl Strategy<Value = TimeOnly> {
        (0u32..24, 0u32..60, 0u32..60, 0u32..1000).prop_filter_map(
            "invalid time",
            |(h, m, s, ms)| NaiveTime::from_hms_milli_opt(h, m, s, ms),
        )
    }

    pub fn arb_iso_duration() -> impl Strategy<Value = IsoDuration> {
        (0u32..30, 0u32..24, 0u32..60, 0u32..60)
            .prop_map(|(days, h, m, s)| IsoDuration::from_hms(h, m, s).with_days(days))
    }

    /// Finite floats only; JSON has no NaN.
    pub fn arb_f64() -> impl Strategy<Value = f64> {
        -1.0e9f64..1.0e9f64
    }

    pub fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
        vec(any::<u8>(), 0..48)
    }

    pub fn arb_texts() -> impl Strategy<Value = Vec<String>> {
        vec(arb_text(), 0..4)
    }

    // === Enum Generators ===

    /// Any declared constant of `E`, the sentinel included.
    pub fn arb_wire_enum<E: WireEnum + Debug>() -> impl Strategy<Value = E> {
        proptest::sample::select(E::VARIANTS)
    }

    // === Shared Model Generators ===

    pub fn arb_identity() -> impl Strategy<Value = Identity> {
        (opt(arb_text()), opt(arb_text())).prop_map(|(display_name, id)| {
            let mut identity = Identity::new();
            identity.set_display_name(display_name);
            identity.set_id(id);
            identity
        })
    }

    pub fn arb_identity_set() -> impl Strategy<Value = IdentitySet> {
        (opt(arb_identity()), opt(arb_identity()), opt(arb_identity())).prop_map(
            |(application, device, user)| {
                let mut set = IdentitySet::new();
                set.set_application(application);
                set.set_device(device);
                set.set_user(user);
                set
            },
        )
    }

    pub fn arb_key_value_pair() -> impl Strategy<Value = KeyValuePair> {
        (opt(arb_text()), opt(arb_text())).prop_map(|(name, value)| {
            let mut pair = KeyValuePair::new();
            pair.set_name(name);
            pair.set_value(value);
            pair
        })
    }

    // === Browser ===

    pub fn arb_browser_site_history() -> impl Strategy<Value = BrowserSiteHistory> {
        (
            opt(any::<bool>()),
            opt(arb_text()),
            opt(arb_wire_enum::<BrowserSiteCompatibilityMode>()),
            opt(arb_identity_set()),
            opt(arb_wire_enum::<BrowserSiteMergeType>()),
            opt(arb_timestamp()),
            opt(arb_wire_enum::<BrowserSiteTargetEnvironment>()),
        )
            .prop_map(|(allow_redirect, comment, mode, by, merge, published, target)| {
                let mut history = BrowserSiteHistory::new();
                history.set_allow_redirect(allow_redirect);
                history.set_comment(comment);
                history.set_compatibility_mode(mode);
                history.set_last_modified_by(by);
                history.set_merge_type(merge);
                history.set_published_date_time(published);
                history.set_target_environment(target);
                history
            })
    }

    pub fn arb_browser_site() -> impl Strategy<Value = BrowserSite> {
        (
            (
                opt(arb_text()),
                opt(any::<bool>()),
                opt(arb_text()),
                opt(arb_wire_enum::<BrowserSiteCompatibilityMode>()),
                opt(arb_timestamp()),
                opt(arb_timestamp()),
            ),
            (
                opt(vec(arb_browser_site_history(), 0..3)),
                opt(arb_identity_set()),
                opt(arb_timestamp()),
                opt(arb_wire_enum::<BrowserSiteMergeType>()),
                opt(arb_wire_enum::<BrowserSiteStatus>()),
                opt(arb_wire_enum::<BrowserSiteTargetEnvironment>()),
                opt(arb_web_url()),
            ),
        )
            .prop_map(
                |(
                    (id, allow_redirect, comment, mode, created, deleted),
                    (history, by, modified, merge, status, target, web_url),
                )| {
                    let mut site = BrowserSite::new();
                    EntityDerived::set_id(&mut site, id);
                    site.set_allow_redirect(allow_redirect);
                    site.set_comment(comment);
                    site.set_compatibility_mode(mode);
                    site.set_created_date_time(created);
                    site.set_deleted_date_time(deleted);
                    site.set_history(history);
                    site.set_last_modified_by(by);
                    site.set_last_modified_date_time(modified);
                    site.set_merge_type(merge);
                    site.set_status(status);
                    site.set_target_environment(target);
                    site.set_web_url(web_url);
                    site
                },
            )
    }

    // === Sites ===

    pub fn arb_meta_data_pairs() -> impl Strategy<Value = Vec<MetaDataKeyStringPair>> {
        vec(
            (opt(arb_text()), opt(arb_text())).prop_map(|(key, value)| {
                let mut pair = MetaDataKeyStringPair::new();
                pair.set_key(key);
                pair.set_value(value);
                pair
            }),
            0..3,
        )
    }

    pub fn arb_server_processed_content() -> impl Strategy<Value = ServerProcessedContent> {
        (
            opt(arb_meta_data_pairs()),
            opt(arb_meta_data_pairs()),
            opt(arb_meta_data_pairs()),
            opt(arb_meta_data_pairs()),
            opt(arb_meta_data_pairs()),
        )
            .prop_map(|(deps, html, images, links, texts)| {
                let mut content = ServerProcessedContent::new();
                content.set_component_dependencies(deps);
                content.set_html_strings(html);
                content.set_image_sources(images);
                content.set_links(links);
                content.set_searchable_plain_texts(texts);
                content
            })
    }

    pub fn arb_title_area() -> impl Strategy<Value = TitleArea> {
        (
            (
                opt(arb_text()),
                opt(any::<bool>()),
                opt(arb_web_url()),
                opt(arb_wire_enum::<TitleAreaLayoutType>()),
                opt(arb_server_processed_content()),
            ),
            (
                opt(any::<bool>()),
                opt(any::<bool>()),
                opt(any::<bool>()),
                opt(arb_text()),
                opt(arb_wire_enum::<TitleAreaTextAlignmentType>()),
            ),
        )
            .prop_map(
                |((alt, gradient, image, layout, content), (author, date, above, text, align))| {
                    let mut area = TitleArea::new();
                    area.set_alternative_text(alt);
                    area.set_enable_gradient_effect(gradient);
                    area.set_image_web_url(image);
                    area.set_layout(layout);
                    area.set_server_processed_content(content);
                    area.set_show_author(author);
                    area.set_show_published_date(date);
                    area.set_show_text_block_above_title(above);
                    area.set_text_above_title(text);
                    area.set_text_alignment(align);
                    area
                },
            )
    }

    pub fn arb_web_part() -> impl Strategy<Value = WebPart> {
        let text = (opt(arb_text()), opt(arb_text())).prop_map(|(id, html)| {
            let mut part = TextWebPart::new();
            EntityDerived::set_id(&mut part, id);
            part.set_inner_html(html.map(|h| format!("<p>{}</p>", h)));
            WebPart::from(part)
        });
        let standard = (opt(arb_text()), opt(arb_text()), opt(arb_text())).prop_map(
            |(id, kind, title)| {
                let mut part = StandardWebPart::new();
                EntityDerived::set_id(&mut part, id);
                part.set_web_part_type(kind);
                if title.is_some() {
                    let mut data = WebPartData::new();
                    data.set_title(title);
                    part.set_data(Some(data));
                }
                WebPart::from(part)
            },
        );
        let base = opt(arb_text()).prop_map(|id| {
            let mut part = WebPartBase::new();
            EntityDerived::set_id(&mut part, id);
            WebPart::from(part)
        });
        prop_oneof![text, standard, base]
    }

    pub fn arb_site_page() -> impl Strategy<Value = SitePage> {
        (
            (
                opt(arb_text()),
                opt(arb_text()),
                opt(arb_web_url()),
                opt(arb_timestamp()),
                opt(arb_identity_set()),
            ),
            (
                opt(arb_wire_enum::<PageLayoutType>()),
                opt(arb_wire_enum::<PagePromotionType>()),
                opt((opt(arb_text()), opt(arb_text()))),
                opt((opt(0i32..1000), opt(0i32..1000), opt(0i32..1000))),
                opt(any::<bool>()),
                opt(any::<bool>()),
            ),
            (
                opt(arb_text()),
                opt(arb_title_area()),
                opt(vec(arb_web_part(), 0..4)),
                opt((opt(arb_text()), opt(arb_text()))),
            ),
        )
            .prop_map(
                |(
                    (id, name, web_url, created, created_by),
                    (layout, promotion, publishing, reactions, comments, recommended),
                    (title, title_area, web_parts, content_type),
                )| {
                    let mut page = SitePage::new();
                    EntityDerived::set_id(&mut page, id);
                    BaseItemDerived::set_name(&mut page, name);
                    BaseItemDerived::set_web_url(&mut page, web_url);
                    BaseItemDerived::set_created_date_time(&mut page, created);
                    BaseItemDerived::set_created_by(&mut page, created_by);
                    page.set_page_layout(layout);
                    page.set_promotion_kind(promotion);
                    page.set_publishing_state(publishing.map(|(level, version)| {
                        let mut facet = PublicationFacet::new();
                        facet.set_level(level);
                        facet.set_version_id(version);
                        facet
                    }));
                    page.set_reactions(reactions.map(|(comments, likes, shares)| {
                        let mut facet = ReactionsFacet::new();
                        facet.set_comment_count(comments);
                        facet.set_like_count(likes);
                        facet.set_share_count(shares);
                        facet
                    }));
                    page.set_show_comments(comments);
                    page.set_show_recommended_pages(recommended);
                    page.set_title(title);
                    page.set_title_area(title_area);
                    page.set_web_parts(web_parts);
                    page.set_content_type(content_type.map(|(id, name)| {
                        let mut info = ContentTypeInfo::new();
                        info.set_id(id);
                        info.set_name(name);
                        info
                    }));
                    page
                },
            )
    }

    // === Operations ===

    pub fn arb_attack_simulation_operation() -> impl Strategy<Value = AttackSimulationOperation> {
        (
            opt(arb_text()),
            opt(arb_timestamp()),
            opt(arb_timestamp()),
            opt(arb_web_url()),
            opt(arb_wire_enum::<LongRunningOperationStatus>()),
            opt(arb_text()),
            opt(0i32..=100),
            opt(arb_text()),
            opt(arb_wire_enum::<AttackSimulationOperationType>()),
        )
            .prop_map(
                |(id, created, last_action, location, status, detail, pct, tenant, kind)| {
                    let mut op = AttackSimulationOperation::new();
                    EntityDerived::set_id(&mut op, id);
                    LongRunningOperationDerived::set_created_date_time(&mut op, created);
                    LongRunningOperationDerived::set_last_action_date_time(&mut op, last_action);
                    LongRunningOperationDerived::set_resource_location(&mut op, location);
                    LongRunningOperationDerived::set_status(&mut op, status);
                    LongRunningOperationDerived::set_status_detail(&mut op, detail);
                    op.set_percentage_completed(pct);
                    op.set_tenant_id(tenant);
                    op.set_operation_type(kind);
                    op
                },
            )
    }

    // === Device Management ===

    pub fn arb_configuration_manager_action_result(
    ) -> impl Strategy<Value = ConfigurationManagerActionResult> {
        (
            opt(arb_text()),
            opt(arb_wire_enum::<ActionState>()),
            opt(arb_timestamp()),
            opt(arb_timestamp()),
            opt(arb_wire_enum::<ConfigurationManagerActionDeliveryStatus>()),
            opt(any::<i32>()),
        )
            .prop_map(|(name, state, updated, started, delivery, code)| {
                let mut result = ConfigurationManagerActionResult::new();
                DeviceActionResultDerived::set_action_name(&mut result, name);
                DeviceActionResultDerived::set_action_state(&mut result, state);
                DeviceActionResultDerived::set_last_updated_date_time(&mut result, updated);
                DeviceActionResultDerived::set_start_date_time(&mut result, started);
                result.set_action_delivery_status(delivery);
                result.set_error_code(code);
                result
            })
    }

    pub fn arb_device_compliance_script() -> impl Strategy<Value = DeviceComplianceScript> {
        (
            (
                opt(arb_text()),
                opt(arb_timestamp()),
                opt(arb_text()),
                opt(arb_bytes()),
                opt(arb_text()),
                opt(any::<bool>()),
            ),
            (
                opt(arb_timestamp()),
                opt(arb_text()),
                opt(arb_texts()),
                opt(any::<bool>()),
                opt(arb_wire_enum::<RunAsAccountType>()),
                opt(arb_text()),
            ),
        )
            .prop_map(
                |(
                    (id, created, description, content, name, signature),
                    (modified, publisher, tags, run32, account, version),
                )| {
                    let mut script = DeviceComplianceScript::new();
                    EntityDerived::set_id(&mut script, id);
                    script.set_created_date_time(created);
                    script.set_description(description);
                    script.set_detection_script_content(content);
                    script.set_display_name(name);
                    script.set_enforce_signature_check(signature);
                    script.set_last_modified_date_time(modified);
                    script.set_publisher(publisher);
                    script.set_role_scope_tag_ids(tags);
                    script.set_run_as32_bit(run32);
                    script.set_run_as_account(account);
                    script.set_version(version);
                    script
                },
            )
    }

    pub fn arb_microsoft_tunnel_site() -> impl Strategy<Value = MicrosoftTunnelSite> {
        (
            (
                opt(arb_text()),
                opt(arb_text()),
                opt(arb_text()),
                opt(arb_web_url()),
                opt(arb_text()),
                opt(arb_texts()),
            ),
            (
                opt(any::<bool>()),
                opt(any::<bool>()),
                opt(arb_time_only()),
                opt(arb_time_only()),
                opt(-720i32..=840),
            ),
        )
            .prop_map(
                |(
                    (id, description, name, network_url, address, tags),
                    (automatic, available, end, start, offset),
                )| {
                    let mut site = MicrosoftTunnelSite::new();
                    EntityDerived::set_id(&mut site, id);
                    site.set_description(description);
                    site.set_display_name(name);
                    site.set_internal_network_probe_url(network_url);
                    site.set_public_address(address);
                    site.set_role_scope_tag_ids(tags);
                    site.set_upgrade_automatically(automatic);
                    site.set_upgrade_available(available);
                    site.set_upgrade_window_end_time(end);
                    site.set_upgrade_window_start_time(start);
                    site.set_upgrade_window_utc_offset_in_minutes(offset);
                    site
                },
            )
    }

    pub fn arb_privileged_role_settings() -> impl Strategy<Value = PrivilegedRoleSettings> {
        (
            (
                opt(any::<bool>()),
                opt(arb_texts()),
                opt(arb_iso_duration()),
                opt(any::<bool>()),
                opt(any::<bool>()),
            ),
            (
                opt(arb_iso_duration()),
                opt(any::<bool>()),
                opt(arb_iso_duration()),
                opt(any::<bool>()),
                opt(any::<bool>()),
            ),
        )
            .prop_map(
                |(
                    (approval, approvers, elevation, configurable, last_admin),
                    (max, mfa, min, notify, ticketing),
                )| {
                    let mut settings = PrivilegedRoleSettings::new();
                    settings.set_approval_on_elevation(approval);
                    settings.set_approver_ids(approvers);
                    settings.set_elevation_duration(elevation);
                    settings.set_is_mfa_on_elevation_configurable(configurable);
                    settings.set_last_global_admin(last_admin);
                    settings.set_max_elevation_duration(max);
                    settings.set_mfa_on_elevation(mfa);
                    settings.set_min_elevation_duration(min);
                    settings.set_notification_to_user_on_elevation(notify);
                    settings.set_ticketing_info_on_elevation(ticketing);
                    settings
                },
            )
    }

    // === Reports and Financials ===

    pub fn arb_office365_active_user_counts() -> impl Strategy<Value = Office365ActiveUserCounts> {
        (
            (opt(any::<i64>()), opt(any::<i64>()), opt(any::<i64>()), opt(arb_date_only())),
            (opt("[0-9]{1,3}"), opt(arb_date_only()), opt(any::<i64>())),
            (opt(any::<i64>()), opt(any::<i64>()), opt(any::<i64>())),
        )
            .prop_map(
                |(
                    (exchange, office365, one_drive, report_date),
                    (period, refreshed, share_point),
                    (skype, teams, yammer),
                )| {
                    let mut counts = Office365ActiveUserCounts::new();
                    counts.set_exchange(exchange);
                    counts.set_office365(office365);
                    counts.set_one_drive(one_drive);
                    counts.set_report_date(report_date);
                    counts.set_report_period(period);
                    counts.set_report_refresh_date(refreshed);
                    counts.set_share_point(share_point);
                    counts.set_skype_for_business(skype);
                    counts.set_teams(teams);
                    counts.set_yammer(yammer);
                    counts
                },
            )
    }

    pub fn arb_relying_party_detailed_summary(
    ) -> impl Strategy<Value = RelyingPartyDetailedSummary> {
        (
            (
                opt(any::<i64>()),
                opt(arb_wire_enum::<MigrationStatus>()),
                opt(vec(arb_key_value_pair(), 0..3)),
                opt(arb_text()),
                opt(arb_text()),
                opt(vec(arb_web_url(), 0..3)),
            ),
            (
                opt(arb_text()),
                opt(0.0f64..=1.0),
                opt(any::<i64>()),
                opt(any::<i64>()),
                opt(any::<i64>()),
            ),
        )
            .prop_map(
                |(
                    (failed, migration, details, party_id, party_name, reply_urls),
                    (service_id, rate, successful, total, unique),
                )| {
                    let mut summary = RelyingPartyDetailedSummary::new();
                    summary.set_failed_sign_in_count(failed);
                    summary.set_migration_status(migration);
                    summary.set_migration_validation_details(details);
                    summary.set_relying_party_id(party_id);
                    summary.set_relying_party_name(party_name);
                    summary.set_reply_urls(reply_urls);
                    summary.set_service_id(service_id);
                    summary.set_sign_in_success_rate(rate);
                    summary.set_successful_sign_in_count(successful);
                    summary.set_total_sign_in_count(total);
                    summary.set_unique_user_count(unique);
                    summary
                },
            )
    }

    pub fn arb_customer_payment() -> impl Strategy<Value = CustomerPayment> {
        (
            (
                opt(arb_f64()),
                opt(arb_uuid()),
                opt(arb_text()),
                opt(arb_text()),
                opt(arb_text()),
                opt(arb_uuid()),
                opt(arb_text()),
            ),
            (
                opt(arb_text()),
                opt(arb_text()),
                opt(arb_text()),
                opt(arb_text()),
                opt(arb_timestamp()),
                opt(any::<i32>()),
                opt(arb_date_only()),
            ),
        )
            .prop_map(
                |(
                    (amount, invoice_id, invoice_number, comment, contact_id, customer_id, customer_number),
                    (description, document, external, journal, modified, line, posting),
                )| {
                    let mut payment = CustomerPayment::new();
                    payment.set_amount(amount);
                    payment.set_applies_to_invoice_id(invoice_id);
                    payment.set_applies_to_invoice_number(invoice_number);
                    payment.set_comment(comment);
                    payment.set_contact_id(contact_id);
                    payment.set_customer_id(customer_id);
                    payment.set_customer_number(customer_number);
                    payment.set_description(description);
                    payment.set_document_number(document);
                    payment.set_external_document_number(external);
                    payment.set_journal_display_name(journal);
                    payment.set_last_modified_date_time(modified);
                    payment.set_line_number(line);
                    payment.set_posting_date(posting);
                    payment
                },
            )
    }

    // === Search ===

    pub fn arb_bookmark() -> impl Strategy<Value = Bookmark> {
        (
            (
                opt(arb_text()),
                opt(arb_text()),
                opt(arb_web_url()),
                opt(arb_timestamp()),
                opt(arb_timestamp()),
                opt(arb_texts()),
            ),
            (
                opt(any::<bool>()),
                opt((opt(arb_texts()), opt(any::<bool>()), opt(arb_texts()))),
                opt(arb_texts()),
                opt(vec(arb_wire_enum::<DevicePlatformType>(), 0..4)),
                opt(arb_wire_enum::<AnswerState>()),
            ),
        )
            .prop_map(
                |(
                    (description, name, web_url, start, end, categories),
                    (suggested, keywords, languages, platforms, state),
                )| {
                    let mut bookmark = Bookmark::new();
                    SearchAnswerDerived::set_description(&mut bookmark, description);
                    SearchAnswerDerived::set_display_name(&mut bookmark, name);
                    SearchAnswerDerived::set_web_url(&mut bookmark, web_url);
                    bookmark.set_availability_start_date_time(start);
                    bookmark.set_availability_end_date_time(end);
                    bookmark.set_categories(categories);
                    bookmark.set_is_suggested(suggested);
                    bookmark.set_keywords(keywords.map(|(words, similar, reserved)| {
                        let mut keyword = AnswerKeyword::new();
                        keyword.set_keywords(words);
                        keyword.set_match_similar_keywords(similar);
                        keyword.set_reserved_keywords(reserved);
                        keyword
                    }));
                    bookmark.set_language_tags(languages);
                    bookmark.set_platforms(platforms);
                    bookmark.set_state(state);
                    bookmark
                },
            )
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Canned payloads and pre-built models.

    use super::*;
    use betasdk_models::{
        BaseItemDerived, EntityDerived, PageLayoutType, PagePromotionType, StandardWebPart,
        TextWebPart, TitleArea, TitleAreaLayoutType, WebPartData,
    };

    /// A browser site as the service returns it, nested history included.
    pub const BROWSER_SITE_JSON: &str = r##"{
        "@odata.type": "#microsoft.graph.browserSite",
        "id": "f3c6d7a2-0000-4000-8000-000000000001",
        "allowRedirect": true,
        "comment": "Legacy intranet",
        "compatibilityMode": "internetExplorer11",
        "createdDateTime": "2023-06-01T08:15:00Z",
        "history": [
            {
                "allowRedirect": false,
                "comment": "Initial publish",
                "compatibilityMode": "default",
                "mergeType": "noMerge",
                "publishedDateTime": "2023-06-02T09:00:00Z",
                "targetEnvironment": "internetExplorerMode"
            }
        ],
        "lastModifiedBy": { "user": { "displayName": "Site Admin", "id": "u-1" } },
        "mergeType": "default",
        "status": "published",
        "targetEnvironment": "internetExplorer11",
        "webUrl": "https://intranet.contoso.com"
    }"##;

    /// A news page with one web part of each kind.
    pub const SITE_PAGE_JSON: &str = r##"{
        "@odata.type": "#microsoft.graph.sitePage",
        "id": "page-1",
        "name": "welcome.aspx",
        "webUrl": "https://contoso.sharepoint.com/sites/hr/SitePages/welcome.aspx",
        "pageLayout": "article",
        "promotionKind": "newsPost",
        "showComments": true,
        "title": "Welcome",
        "titleArea": { "layout": "imageAndTitle", "showAuthor": true, "textAlignment": "left" },
        "reactions": { "commentCount": 3, "likeCount": 12 },
        "webParts": [
            { "@odata.type": "#microsoft.graph.textWebPart", "id": "w1", "innerHtml": "<p>Hello</p>" },
            {
                "@odata.type": "#microsoft.graph.standardWebPart",
                "id": "w2",
                "webPartType": "daf0b71c-6de8-4ef7-b511-faae7c388708",
                "data": { "dataVersion": "1.0", "title": "Quick links" }
            }
        ]
    }"##;

    /// `BrowserSite{webUrl: https://example.com, allowRedirect: true}`, every
    /// other field unset.
    pub fn example_browser_site() -> BrowserSite {
        let mut site = BrowserSite::new();
        site.set_web_url(Some("https://example.com".to_string()));
        site.set_allow_redirect(Some(true));
        site
    }

    /// A page with every kind of nested content, for benches.
    pub fn populated_site_page() -> SitePage {
        let mut page = SitePage::new();
        EntityDerived::set_id(&mut page, Some("page-1".to_string()));
        BaseItemDerived::set_name(&mut page, Some("welcome.aspx".to_string()));
        page.set_page_layout(Some(PageLayoutType::Article));
        page.set_promotion_kind(Some(PagePromotionType::NewsPost));
        page.set_title(Some("Welcome".to_string()));

        let mut area = TitleArea::new();
        area.set_layout(Some(TitleAreaLayoutType::Plain));
        area.set_show_author(Some(true));
        page.set_title_area(Some(area));

        let mut parts = Vec::with_capacity(32);
        for i in 0..16 {
            let mut text = TextWebPart::new();
            EntityDerived::set_id(&mut text, Some(format!("text-{}", i)));
            text.set_inner_html(Some(format!("<p>Paragraph {}</p>", i)));
            parts.push(WebPart::from(text));

            let mut standard = StandardWebPart::new();
            EntityDerived::set_id(&mut standard, Some(format!("std-{}", i)));
            standard.set_web_part_type(Some("daf0b71c-6de8-4ef7-b511-faae7c388708".to_string()));
            let mut data = WebPartData::new();
            data.set_title(Some(format!("Links {}", i)));
            standard.set_data(Some(data));
            parts.push(WebPart::from(standard));
        }
        page.set_web_parts(Some(parts));
        page
    }
}
