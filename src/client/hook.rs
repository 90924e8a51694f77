use dioxus::prelude::*;

use crate::model::guild::GuildSettings;

#[cfg(feature = "web")]
use std::future::Future;

#[cfg(feature = "web")]
use crate::{
    client::{model::error::ApiError, store::toast::Toaster},
    model::guild::UpdateGuildConfigDto,
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Counter pages bump after a mutation to reload their data.
pub fn use_refetch() -> Signal<u32> {
    use_signal(|| 0u32)
}

pub fn bump(mut refetch: Signal<u32>) {
    refetch.set(refetch() + 1);
}

/// Loads `fetch` into `target` on mount and whenever `refetch` changes.
///
/// Failures keep the previous value and surface as an error toast.
#[cfg(feature = "web")]
pub fn use_fetch<T, F, Fut>(refetch: Signal<u32>, target: Signal<Option<T>>, fetch: F)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let toaster = use_context::<Toaster>();

    let _ = use_resource(move || {
        let _ = refetch();
        let future = fetch();
        let mut target = target;
        let mut toaster = toaster;
        async move {
            match future.await {
                Ok(value) => target.set(Some(value)),
                Err(err) => {
                    tracing::error!("Request failed: {}", err);
                    toaster.error(err.message);
                }
            }
        }
    });
}

/// Editable copy of the guild's settings, loaded on mount.
pub fn use_guild_settings(guild_id: u64) -> Signal<Option<GuildSettings>> {
    let settings = use_signal(|| None::<GuildSettings>);

    #[cfg(feature = "web")]
    use_fetch(use_refetch(), settings, move || async move {
        crate::client::api::guild::get_guild(guild_id)
            .await
            .map(|config| config.settings)
    });

    #[cfg(not(feature = "web"))]
    let _ = guild_id;

    settings
}

/// Applies `change` to the loaded settings, if any.
pub fn edit_settings(
    mut settings: Signal<Option<GuildSettings>>,
    change: impl FnOnce(&mut GuildSettings),
) {
    if let Some(current) = settings.write().as_mut() {
        change(current);
    }
}

/// Saves a partial update and replaces the local copy with the merged result.
#[cfg(feature = "web")]
pub async fn save_settings(
    guild_id: u64,
    update: UpdateGuildConfigDto,
    mut settings: Signal<Option<GuildSettings>>,
    mut toaster: Toaster,
) {
    match crate::client::api::guild::update_guild(guild_id, update).await {
        Ok(config) => {
            settings.set(Some(config.settings));
            toaster.success("Settings saved");
        }
        Err(err) => toaster.error(err.message),
    }
}
