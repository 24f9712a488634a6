use std::collections::VecDeque;

use crate::error::AppError;
use crate::mvu::page::{Deps, Msg, PageModel, run_effect, update};

/// Runs the MVU loop for a page: seeds with `init_msg` and drains effects in
/// the order they were issued.
///
/// # Errors
///
/// Returns the first failure of the current generation. The failure is also
/// recorded on the model.
pub async fn run_page(model: &mut PageModel, init_msg: Msg, deps: Deps<'_>) -> Result<(), AppError> {
    let mut effects: VecDeque<_> = update(model, init_msg).into();
    while let Some(effect) = effects.pop_front() {
        let msg = run_effect(effect, model, deps).await;
        match msg {
            Msg::Failed { generation, error } if generation == model.generation => {
                log::error!("page load failed: {error}");
                update(
                    model,
                    Msg::Failed {
                        generation,
                        error: error.clone(),
                    },
                );
                return Err(error);
            }
            other => {
                effects.extend(update(model, other));
            }
        }
    }
    Ok(())
}
