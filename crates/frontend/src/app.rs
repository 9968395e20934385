use crate::shared::notifications::{NotificationCenter, NotificationHost};
use crate::usecases::u508_save_query::{SaveQuery, SaveQueryConfig, SaveQueryServices};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = SaveQueryConfig::from_location();

    // Provide the notification center to the whole app via context.
    let notifications = NotificationCenter::new(config.notification_timeout_ms);
    provide_context(notifications);

    provide_context(SaveQueryServices::from_config(&config, notifications));
    provide_context(config);

    let sql = RwSignal::new("SELECT 1".to_string());
    let schema = RwSignal::new("public".to_string());
    let db_id = RwSignal::new(1_i64);

    view! {
        <div class="sql-editor">
            <textarea
                class="sql-editor__text"
                prop:value=move || sql.get()
                on:input=move |ev| sql.set(event_target_value(&ev))
            ></textarea>
            <div class="sql-editor__toolbar">
                <SaveQuery sql=sql schema=schema db_id=db_id />
            </div>
        </div>
        <NotificationHost />
    }
}
