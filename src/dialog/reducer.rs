//! Reducer for dialog state transitions.

use crate::host::DialogButton;
use crate::ui::mvi::Reducer;

use super::intent::DialogIntent;
use super::state::DialogState;

pub struct DialogReducer;

impl Reducer for DialogReducer {
    type State = DialogState;
    type Intent = DialogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DialogIntent::Opened {
                session,
                container,
                has_cancel,
            } => DialogState::Open {
                session,
                container,
                focused: DialogButton::Confirm,
                has_cancel,
            },

            DialogIntent::FocusNext => match state {
                DialogState::Open {
                    session,
                    container,
                    focused,
                    has_cancel,
                } => {
                    let focused = match focused {
                        DialogButton::Confirm if has_cancel => DialogButton::Cancel,
                        _ => DialogButton::Confirm,
                    };
                    DialogState::Open {
                        session,
                        container,
                        focused,
                        has_cancel,
                    }
                }
                closed => closed,
            },

            DialogIntent::Closed => DialogState::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::state::SessionId;
    use crate::host::NodeId;

    fn opened(has_cancel: bool) -> DialogState {
        DialogReducer::reduce(
            DialogState::Closed,
            DialogIntent::Opened {
                session: SessionId::new(1),
                container: NodeId::new(4),
                has_cancel,
            },
        )
    }

    #[test]
    fn opened_focuses_confirm() {
        assert_eq!(opened(true).focused(), Some(DialogButton::Confirm));
    }

    #[test]
    fn focus_cycles_between_buttons() {
        let state = DialogReducer::reduce(opened(true), DialogIntent::FocusNext);
        assert_eq!(state.focused(), Some(DialogButton::Cancel));
        let state = DialogReducer::reduce(state, DialogIntent::FocusNext);
        assert_eq!(state.focused(), Some(DialogButton::Confirm));
    }

    #[test]
    fn focus_stays_on_confirm_without_cancel() {
        let state = DialogReducer::reduce(opened(false), DialogIntent::FocusNext);
        assert_eq!(state.focused(), Some(DialogButton::Confirm));
    }

    #[test]
    fn focus_next_while_closed_is_ignored() {
        let state = DialogReducer::reduce(DialogState::Closed, DialogIntent::FocusNext);
        assert_eq!(state, DialogState::Closed);
    }

    #[test]
    fn closed_resets_state() {
        let state = DialogReducer::reduce(opened(true), DialogIntent::Closed);
        assert_eq!(state, DialogState::Closed);
    }
}
