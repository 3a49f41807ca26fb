use crate::{messages, Availability, Effect, MessageFormat, Msg, WatchState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: WatchState, msg: Msg) -> (WatchState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![
            Effect::Broadcast {
                text: messages::STARTED.to_string(),
                format: MessageFormat::Markdown,
            },
            Effect::Note(messages::STARTED.trim_end().to_string()),
        ],
        Msg::PageClassified(classification) => {
            let current = classification.availability;
            if state.last_known() == Some(current) {
                return (state, Vec::new());
            }
            state.record(current);

            let mut effects = vec![Effect::PersistAvailability(current)];
            match current {
                Availability::OpenForSignup => effects.push(Effect::Broadcast {
                    text: messages::signup_announcement(&classification.signup_links),
                    format: MessageFormat::Markdown,
                }),
                Availability::Upcoming => {
                    effects.push(Effect::Note(messages::NO_SLOTS.trim_end().to_string()))
                }
                Availability::Unknown => effects.push(Effect::Broadcast {
                    text: messages::UNKNOWN_STATE.to_string(),
                    format: MessageFormat::Markdown,
                }),
            }
            effects
        }
    };

    (state, effects)
}
