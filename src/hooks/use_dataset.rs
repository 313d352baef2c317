use crate::hooks::use_request::{RequestState, use_request_from};
use crate::models::explorer::ExplorerDataset;
use crate::services::api::fetch_dataset;
use yew::prelude::*;

/// Fetches the explorer dataset once, when the calling view mounts.
///
/// Starts out `Pending`. A response arriving after unmount is dropped.
#[hook]
pub fn use_dataset() -> RequestState<ExplorerDataset> {
    let request = use_request_from(RequestState::Pending);

    {
        let request = request.clone();

        use_effect_with((), move |_| {
            request.run(
                async {
                    let result = fetch_dataset().await;
                    if let Err(e) = &result {
                        gloo::console::error!(format!("Failed to load dataset: {e}"));
                    }
                    result
                },
                |_| (),
            );
            || ()
        });
    }

    request.state().clone()
}
