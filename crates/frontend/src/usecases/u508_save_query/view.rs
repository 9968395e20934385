use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_save_query::SaveQuery as SaveQueryUseCase;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

use super::config::SaveQueryConfig;
use super::outcome::{report_outcome, Liveness};
use super::state::{AnchorRect, QueryContext, SaveQueryForm, SaveQuerySubmission};
use super::SaveQueryServices;
use crate::shared::components::ui::{Input, Textarea};

fn anchor_from_event(ev: &leptos::ev::MouseEvent) -> Option<AnchorRect> {
    let element = ev
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())?;
    let rect = element.get_bounding_client_rect();
    Some(AnchorRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

fn dispatch_save(
    submission: SaveQuerySubmission,
    services: SaveQueryServices,
    form: RwSignal<SaveQueryForm>,
    liveness: Liveness,
) {
    log::debug!(
        "saving query '{}' (db {}, schema '{}')",
        submission.request.label,
        submission.request.db_id,
        submission.request.schema
    );

    spawn_local(async move {
        let result = services.transport.create(&submission).await;
        let status = report_outcome(&result, services.notifier.as_ref());

        if liveness.is_alive() {
            let _ = form.try_update(|f| f.record_status(status));
        } else {
            log::debug!("save finished after the widget was unmounted");
        }
    });
}

/// Closes the popover and sends the current form, reading the token now
fn save_and_dispatch(
    form: RwSignal<SaveQueryForm>,
    services: &SaveQueryServices,
    context: QueryContext,
    liveness: Liveness,
) {
    let csrf_token = services.csrf.token().unwrap_or_else(|| {
        log::warn!("no CSRF token found, saving without one");
        String::new()
    });
    if let Some(submission) = form.try_update(|f| f.save(context, csrf_token)) {
        dispatch_save(submission, services.clone(), form, liveness);
    }
}

/// "Save" toolbar button with a popover form for label and description
///
/// The popover closes as soon as Save is clicked; the result of the request
/// is reported through the injected notifier.
#[component]
pub fn SaveQuery(
    /// Initial label; falls back to the configured default
    #[prop(optional, into)]
    default_label: Option<String>,
    /// SQL text to save
    #[prop(into)]
    sql: Signal<String>,
    /// Schema the query runs against
    #[prop(into)]
    schema: Signal<String>,
    /// Database the query runs against
    #[prop(into)]
    db_id: Signal<i64>,
    /// Animate the popover; falls back to the configured default
    #[prop(optional)]
    animation: Option<bool>,
    /// Collaborators; taken from context when not passed
    #[prop(optional)]
    services: Option<SaveQueryServices>,
) -> impl IntoView {
    let config = use_context::<SaveQueryConfig>().unwrap_or_default();
    let services = services
        .or_else(use_context::<SaveQueryServices>)
        .expect("SaveQueryServices not provided in context");
    let animation = animation.unwrap_or(config.animation);

    let form = RwSignal::new(SaveQueryForm::new(
        default_label.unwrap_or(config.default_label),
    ));

    let liveness = Liveness::new();
    on_cleanup(move || {
        log::debug!("SaveQuery widget unmounted");
        liveness.mark_gone();
    });

    let label = Signal::derive(move || form.with(|f| f.label().to_string()));
    let description = Signal::derive(move || form.with(|f| f.description().to_string()));
    let on_label = Callback::new(move |text: String| form.update(|f| f.set_label(text)));
    let on_description =
        Callback::new(move |text: String| form.update(|f| f.set_description(text)));

    let on_save = Callback::new(move |_: leptos::ev::MouseEvent| {
        let context = QueryContext {
            sql: sql.get_untracked(),
            schema: schema.get_untracked(),
            db_id: db_id.get_untracked(),
        };
        save_and_dispatch(form, &services, context, liveness);
    });
    let on_cancel = Callback::new(move |_: leptos::ev::MouseEvent| form.update(|f| f.cancel()));
    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        let anchor = anchor_from_event(&ev);
        form.update(|f| f.toggle(anchor));
    };

    view! {
        <span
            class="save-query"
            title=SaveQueryUseCase::display_name()
            data-usecase=SaveQueryUseCase::full_name()
            data-save-status=move || form.with(|f| f.last_status().map(|s| s.as_str()))
        >
            <Show when=move || form.with(|f| f.visible())>
                <div
                    class="save-query__popover"
                    class:save-query__popover--animated=animation
                    role="dialog"
                    style=move || form.with(|f| f.anchor().map(|a| a.popover_style()).unwrap_or_default())
                >
                    <Input
                        id="save-query-label"
                        label="Label"
                        placeholder="Label for your query"
                        value=label
                        on_input=on_label
                    />
                    <br />
                    <Textarea
                        id="save-query-description"
                        label="Description"
                        placeholder="Description"
                        value=description
                        on_input=on_description
                    />
                    <br />
                    <Flex gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |ev| on_save.run(ev)
                        >
                            "Save"
                        </Button>
                        <Button
                            class="cancelQuery"
                            appearance=ButtonAppearance::Secondary
                            on_click=move |ev| on_cancel.run(ev)
                        >
                            "Cancel"
                        </Button>
                    </Flex>
                </div>
            </Show>
            <Button size=ButtonSize::Small class="toggleSave" on_click=on_toggle>
                <i class="fa fa-save"></i>
                " Save"
            </Button>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use any_spawner::Executor;
    use contracts::usecases::u508_save_query::SaveQueryRequest;

    use crate::shared::csrf::StaticCsrfToken;
    use crate::shared::notifications::testing::RecordingNotifier;
    use crate::shared::notifications::NotificationKind;
    use crate::usecases::u508_save_query::api::testing::RecordingTransport;
    use crate::usecases::u508_save_query::error::SaveQueryError;
    use crate::usecases::u508_save_query::outcome::SAVED_MESSAGE;
    use crate::usecases::u508_save_query::state::SaveStatus;

    struct Widget {
        form: RwSignal<SaveQueryForm>,
        liveness: Liveness,
        services: SaveQueryServices,
        notifier: Arc<RecordingNotifier>,
        transport: Arc<RecordingTransport>,
    }

    fn mount(reply: Result<serde_json::Value, SaveQueryError>) -> Widget {
        let _ = Executor::init_futures_executor();

        let notifier = Arc::new(RecordingNotifier::default());
        let transport = Arc::new(RecordingTransport::replying(reply));
        let services = SaveQueryServices {
            notifier: notifier.clone(),
            csrf: Arc::new(StaticCsrfToken("tok".to_string())),
            transport: transport.clone(),
        };

        let form = RwSignal::new(SaveQueryForm::new("Undefined"));
        form.update(|f| {
            f.toggle(None);
            f.set_label("Q1");
            f.set_description("test");
        });

        Widget {
            form,
            liveness: Liveness::new(),
            services,
            notifier,
            transport,
        }
    }

    fn context() -> QueryContext {
        QueryContext {
            sql: "SELECT 1".to_string(),
            schema: "public".to_string(),
            db_id: 3,
        }
    }

    fn save(widget: &Widget) {
        save_and_dispatch(widget.form, &widget.services, context(), widget.liveness);
    }

    #[test]
    fn test_save_posts_once_and_reports_success() {
        let owner = Owner::new();
        owner.with(|| {
            let widget = mount(Ok(serde_json::json!({})));
            save(&widget);

            // closed before the request has run
            assert!(!widget.form.with_untracked(|f| f.visible()));
            assert!(widget.notifier.sent().is_empty());

            Executor::poll_local();

            let calls = widget.transport.calls();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].path, "/savedqueryviewapi/api/create");
            assert_eq!(
                calls[0].request,
                SaveQueryRequest {
                    label: "Q1".to_string(),
                    description: "test".to_string(),
                    db_id: 3,
                    schema: "public".to_string(),
                    sql: "SELECT 1".to_string(),
                    csrf_token: "tok".to_string(),
                }
            );
            assert_eq!(
                widget.notifier.sent(),
                vec![(NotificationKind::Success, SAVED_MESSAGE.to_string())]
            );
            assert_eq!(
                widget.form.with_untracked(|f| f.last_status()),
                Some(SaveStatus::Saved)
            );
        });
    }

    #[test]
    fn test_failed_save_reports_error_once() {
        let owner = Owner::new();
        owner.with(|| {
            let widget = mount(Err(SaveQueryError::Network("boom".to_string())));
            save(&widget);
            Executor::poll_local();

            assert_eq!(widget.transport.calls().len(), 1);
            assert_eq!(widget.notifier.count(NotificationKind::Success), 0);
            assert_eq!(
                widget.notifier.sent(),
                vec![(
                    NotificationKind::Error,
                    "The query couldn't be saved. \nNetwork error: boom".to_string()
                )]
            );
            assert_eq!(
                widget.form.with_untracked(|f| f.last_status()),
                Some(SaveStatus::Failed)
            );
        });
    }

    #[test]
    fn test_completion_after_unmount_leaves_state_alone() {
        let owner = Owner::new();
        owner.with(|| {
            let widget = mount(Ok(serde_json::json!({})));
            save(&widget);
            widget.liveness.mark_gone();
            Executor::poll_local();

            assert_eq!(widget.transport.calls().len(), 1);
            assert_eq!(widget.notifier.count(NotificationKind::Success), 1);
            assert_eq!(widget.form.with_untracked(|f| f.last_status()), None);
        });
    }

    #[test]
    fn test_completion_after_owner_disposed_does_not_panic() {
        let owner = Owner::new();
        let widget = owner.with(|| {
            let widget = mount(Err(SaveQueryError::Network("gone".to_string())));
            save(&widget);
            widget
        });
        owner.cleanup();
        Executor::poll_local();

        assert_eq!(widget.transport.calls().len(), 1);
        assert_eq!(widget.notifier.count(NotificationKind::Error), 1);
        assert!(widget.form.try_with_untracked(|f| f.last_status()).is_none());
    }

    #[test]
    fn test_toggle_title_comes_from_usecase() {
        assert_eq!(SaveQueryUseCase::display_name(), "Save query");
        assert_eq!(SaveQueryUseCase::full_name(), "u508_save_query");
    }
}
