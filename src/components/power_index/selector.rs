use leptos::prelude::*;

use crate::scoring::WeightingProfile;

/// Radio group choosing the active weighting model.
#[component]
pub fn ProfileSelector(profile: RwSignal<WeightingProfile>) -> impl IntoView {
	view! {
		<div class="profile-selector">
			<label class="profile-selector-title">"Select Weighting Model:"</label>
			{WeightingProfile::ALL
				.into_iter()
				.map(|option| {
					view! {
						<label class="profile-option">
							<input
								type="radio"
								name="weight-model"
								value=option.key()
								prop:checked=move || profile.get() == option
								on:change=move |_| profile.set(option)
							/>
							{option.label()}
						</label>
					}
				})
				.collect_view()}
		</div>
	}
}
