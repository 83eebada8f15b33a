//! This module defines the `VoteController`, the component that owns one
//! votable's locally displayed vote state.
//!
//! A vote goes through two phases. `begin_vote` runs synchronously in the
//! click handler: it checks the session, refuses double submission and
//! applies the optimistic update. The caller then sends the vote and hands
//! the result back to `confirm` (server state replaces local state) or
//! `fail` (local state is restored to what it was before the click).
//! `cast` runs both phases around a single `VoteApi` call.
use cashback_votes_api::{ApiError, VoteApi};
use cashback_votes_shared::types::{
    VotableId, VotableKind, VotableSnapshot, VotableStatus, VoteConfirmation, VoteDirection,
    VoteState, VotesCount,
};
use tracing::{debug, info, warn};

use crate::errors::VoteError;
use crate::session::Session;
use crate::signals::{SignalSink, VoteSignal};
use crate::transition::{VoteTransition, apply_vote};

/// A vote whose optimistic update has been applied and that awaits the backend.
///
/// Must be resolved with `VoteController::confirm` or `VoteController::fail`;
/// until then the controller refuses further votes.
#[derive(Debug)]
#[must_use = "a pending vote must be confirmed or failed"]
pub struct PendingVote {
    votable: VotableId,
    direction: VoteDirection,
    transition: VoteTransition,
    previous_counts: VotesCount,
    previous_vote: VoteState,
}

impl PendingVote {
    pub fn votable(&self) -> VotableId {
        self.votable
    }

    /// The direction to send to the backend.
    pub fn direction(&self) -> VoteDirection {
        self.direction
    }

    pub fn transition(&self) -> VoteTransition {
        self.transition
    }
}

/// Local state after the backend confirmed a vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOutcome {
    pub counts: VotesCount,
    pub user_vote: VoteState,
    pub status: Option<VotableStatus>,
    /// The vote pushed a rate suggestion over quorum.
    pub accepted: bool,
    /// The backend reported a status different from the one displayed before.
    pub status_changed: bool,
}

/// Owns the vote counts, the acting user's vote and the status of one votable.
#[derive(Debug, Clone)]
pub struct VoteController {
    votable: VotableId,
    counts: VotesCount,
    user_vote: VoteState,
    status: Option<VotableStatus>,
    pending: bool,
}

impl VoteController {
    /// Creates a controller initialised from a server snapshot.
    pub fn new(snapshot: VotableSnapshot) -> Self {
        Self {
            votable: snapshot.votable,
            counts: snapshot.counts,
            user_vote: snapshot.user_vote,
            status: snapshot.status,
            pending: false,
        }
    }

    pub fn votable(&self) -> VotableId {
        self.votable
    }

    pub fn counts(&self) -> VotesCount {
        self.counts
    }

    pub fn user_vote(&self) -> VoteState {
        self.user_vote
    }

    pub fn status(&self) -> Option<VotableStatus> {
        self.status
    }

    pub fn score(&self) -> i64 {
        self.counts.score()
    }

    /// True while a vote awaits confirmation.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Starts a vote: checks the session, refuses double submission and applies
    /// the optimistic update.
    ///
    /// # Errors
    ///
    /// * `VoteError::Unauthenticated` - The session is anonymous; nothing changed
    /// * `VoteError::VoteInFlight` - A previous vote is unresolved; nothing changed
    pub fn begin_vote(
        &mut self,
        session: &Session,
        direction: VoteDirection,
    ) -> Result<PendingVote, VoteError> {
        if !session.is_authenticated() {
            return Err(VoteError::Unauthenticated);
        }
        if self.pending {
            return Err(VoteError::VoteInFlight);
        }

        let transition = apply_vote(self.user_vote, direction);
        let pending = PendingVote {
            votable: self.votable,
            direction,
            transition,
            previous_counts: self.counts,
            previous_vote: self.user_vote,
        };

        self.counts = transition.apply_to(self.counts);
        self.user_vote = transition.next;
        self.pending = true;

        debug!(
            votable = %self.votable,
            direction = %direction,
            kind = ?transition.kind(),
            upvotes = self.counts.upvotes,
            downvotes = self.counts.downvotes,
            "Applied optimistic vote"
        );

        Ok(pending)
    }

    /// Replaces local state with the backend's authoritative confirmation.
    ///
    /// # Errors
    ///
    /// * `VoteError::ForeignPendingVote` - `pending` was not started by this
    ///   controller, or this controller has nothing pending; nothing changed
    pub fn confirm(
        &mut self,
        pending: PendingVote,
        confirmation: VoteConfirmation,
    ) -> Result<VoteOutcome, VoteError> {
        self.check_owned(&pending)?;

        if confirmation.counts != self.counts || confirmation.user_vote != self.user_vote {
            info!(
                votable = %self.votable,
                optimistic_upvotes = self.counts.upvotes,
                optimistic_downvotes = self.counts.downvotes,
                optimistic_vote = %self.user_vote,
                upvotes = confirmation.counts.upvotes,
                downvotes = confirmation.counts.downvotes,
                user_vote = %confirmation.user_vote,
                "Backend corrected optimistic vote"
            );
        }

        let previous_status = self.status;
        self.counts = confirmation.counts;
        self.user_vote = confirmation.user_vote;
        if confirmation.status.is_some() {
            self.status = confirmation.status;
        }
        self.pending = false;

        Ok(VoteOutcome {
            counts: self.counts,
            user_vote: self.user_vote,
            status: self.status,
            accepted: confirmation.accepted,
            status_changed: self.status != previous_status,
        })
    }

    /// Rolls back the optimistic update of `pending` after the backend call failed.
    ///
    /// Returns the error to surface, wrapped as `VoteError::NetworkFailure`.
    /// A `pending` vote this controller does not own leaves state untouched
    /// and yields `VoteError::ForeignPendingVote` instead.
    pub fn fail(&mut self, pending: PendingVote, error: ApiError) -> VoteError {
        if let Err(foreign) = self.check_owned(&pending) {
            return foreign;
        }

        self.counts = pending.previous_counts;
        self.user_vote = pending.previous_vote;
        self.pending = false;

        warn!(
            votable = %self.votable,
            direction = %pending.direction,
            error = %error,
            "Vote failed, restored previous state"
        );

        VoteError::NetworkFailure(error)
    }

    fn check_owned(&self, pending: &PendingVote) -> Result<(), VoteError> {
        if pending.votable == self.votable && self.pending {
            return Ok(());
        }
        warn!(
            votable = %self.votable,
            pending = %pending.votable,
            is_pending = self.pending,
            "Refusing to resolve a pending vote this controller did not start"
        );
        Err(VoteError::ForeignPendingVote {
            votable: self.votable,
            pending: pending.votable,
        })
    }

    /// Replaces local state with a newer server snapshot, e.g. after the parent
    /// view reloaded.
    ///
    /// Ignored while a vote is pending, so the confirmation stays the single
    /// source of the next state. Returns whether the snapshot was applied.
    pub fn refresh(&mut self, snapshot: VotableSnapshot) -> bool {
        if snapshot.votable != self.votable {
            warn!(
                votable = %self.votable,
                snapshot = %snapshot.votable,
                "Ignoring snapshot of another votable"
            );
            return false;
        }
        if self.pending {
            debug!(votable = %self.votable, "Ignoring snapshot while a vote is pending");
            return false;
        }

        self.counts = snapshot.counts;
        self.user_vote = snapshot.user_vote;
        if snapshot.status.is_some() {
            self.status = snapshot.status;
        }
        true
    }

    /// Casts a vote end to end: optimistic update, one backend call, then
    /// reconciliation or rollback. Outcomes are reported to `signals`.
    ///
    /// # Errors
    ///
    /// * `VoteError::Unauthenticated` - `LoginRequired` was emitted; no call made
    /// * `VoteError::VoteInFlight` - A previous vote is unresolved; no call made
    /// * `VoteError::NetworkFailure` - `VoteFailed` was emitted; state rolled back
    pub async fn cast(
        &mut self,
        session: &Session,
        direction: VoteDirection,
        api: &dyn VoteApi,
        signals: &dyn SignalSink,
    ) -> Result<VoteOutcome, VoteError> {
        let pending = match self.begin_vote(session, direction) {
            Ok(pending) => pending,
            Err(VoteError::Unauthenticated) => {
                info!(votable = %self.votable, "Vote requires login");
                signals.emit(VoteSignal::LoginRequired);
                return Err(VoteError::Unauthenticated);
            }
            Err(e) => return Err(e),
        };

        match api.cast_vote(self.votable, pending.direction()).await {
            Ok(confirmation) => {
                let previous_status = self.status;
                let outcome = self.confirm(pending, confirmation)?;
                self.emit_confirmation(signals, previous_status, &outcome);
                Ok(outcome)
            }
            Err(error) => {
                if error.is_unauthorized() {
                    signals.emit(VoteSignal::LoginRequired);
                }
                signals.emit(VoteSignal::VoteFailed {
                    votable: self.votable,
                    reason: error.to_string(),
                });
                Err(self.fail(pending, error))
            }
        }
    }

    fn emit_confirmation(
        &self,
        signals: &dyn SignalSink,
        previous_status: Option<VotableStatus>,
        outcome: &VoteOutcome,
    ) {
        signals.emit(VoteSignal::VoteRecorded {
            votable: self.votable,
            user_vote: outcome.user_vote,
        });

        if self.votable.kind == VotableKind::Entry && outcome.status_changed {
            if let Some(to) = outcome.status {
                info!(votable = %self.votable, status = %to, "Entry status changed");
                signals.emit(VoteSignal::EntryStatusChanged {
                    votable: self.votable,
                    from: previous_status,
                    to,
                });
            }
        }

        if outcome.accepted {
            info!(votable = %self.votable, "Suggestion accepted by the community");
            signals.emit(VoteSignal::SuggestionAccepted {
                votable: self.votable,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::TransitionKind;
    use cashback_votes_shared::types::{EntryStatus, SuggestionStatus};
    use uuid::Uuid;

    fn controller(upvotes: u32, downvotes: u32, user_vote: VoteState) -> VoteController {
        VoteController::new(
            VotableSnapshot::new(
                VotableId::entry(Uuid::new_v4()),
                VotesCount::new(upvotes, downvotes),
                user_vote,
            )
            .with_status(VotableStatus::Entry(EntryStatus::Pending)),
        )
    }

    fn session() -> Session {
        Session::authenticated("token")
    }

    #[test]
    fn test_begin_vote_applies_optimistic_update() {
        let mut controller = controller(3, 1, VoteState::None);
        let pending = controller.begin_vote(&session(), VoteDirection::Up).unwrap();

        assert_eq!(pending.direction(), VoteDirection::Up);
        assert_eq!(pending.transition().kind(), TransitionKind::NewVote);
        assert_eq!(controller.counts(), VotesCount::new(4, 1));
        assert_eq!(controller.user_vote(), VoteState::Up);
        assert!(controller.is_pending());
    }

    #[test]
    fn test_anonymous_vote_changes_nothing() {
        let mut controller = controller(3, 1, VoteState::None);
        let result = controller.begin_vote(&Session::Anonymous, VoteDirection::Up);

        assert!(matches!(result, Err(VoteError::Unauthenticated)));
        assert_eq!(controller.counts(), VotesCount::new(3, 1));
        assert_eq!(controller.user_vote(), VoteState::None);
        assert!(!controller.is_pending());
    }

    #[test]
    fn test_second_vote_while_pending_is_refused() {
        let mut controller = controller(3, 1, VoteState::None);
        let _pending = controller.begin_vote(&session(), VoteDirection::Up).unwrap();

        let result = controller.begin_vote(&session(), VoteDirection::Up);
        assert!(matches!(result, Err(VoteError::VoteInFlight)));
        assert_eq!(controller.counts(), VotesCount::new(4, 1));
        assert_eq!(controller.user_vote(), VoteState::Up);
    }

    #[test]
    fn test_fail_restores_pre_click_state() {
        let mut controller = controller(3, 1, VoteState::None);
        let pending = controller.begin_vote(&session(), VoteDirection::Up).unwrap();

        let error = controller.fail(pending, ApiError::Mock("timeout".to_string()));
        assert!(matches!(error, VoteError::NetworkFailure(ApiError::Mock(_))));
        assert_eq!(controller.counts(), VotesCount::new(3, 1));
        assert_eq!(controller.user_vote(), VoteState::None);
        assert!(!controller.is_pending());
    }

    #[test]
    fn test_confirm_adopts_server_state() {
        let mut controller = controller(3, 1, VoteState::None);
        let pending = controller.begin_vote(&session(), VoteDirection::Up).unwrap();

        // Someone else voted in the meantime.
        let confirmation = VoteConfirmation::new(VotesCount::new(6, 0), VoteState::Up)
            .with_status(VotableStatus::Entry(EntryStatus::Verified));
        let outcome = controller.confirm(pending, confirmation).unwrap();

        assert_eq!(outcome.counts, VotesCount::new(6, 0));
        assert!(outcome.status_changed);
        assert_eq!(controller.status(), Some(VotableStatus::Entry(EntryStatus::Verified)));
        assert!(!controller.is_pending());
    }

    #[test]
    fn test_confirm_without_status_keeps_current_status() {
        let mut controller = controller(0, 0, VoteState::None);
        let pending = controller.begin_vote(&session(), VoteDirection::Down).unwrap();

        let outcome = controller
            .confirm(
                pending,
                VoteConfirmation::new(VotesCount::new(0, 1), VoteState::Down),
            )
            .unwrap();
        assert!(!outcome.status_changed);
        assert_eq!(outcome.status, Some(VotableStatus::Entry(EntryStatus::Pending)));
    }

    #[test]
    fn test_refresh_is_ignored_while_pending() {
        let mut controller = controller(3, 1, VoteState::None);
        let snapshot = VotableSnapshot::new(
            controller.votable(),
            VotesCount::new(10, 10),
            VoteState::Down,
        );

        let pending = controller.begin_vote(&session(), VoteDirection::Up).unwrap();
        assert!(!controller.refresh(snapshot.clone()));
        assert_eq!(controller.counts(), VotesCount::new(4, 1));

        let _ = controller.fail(pending, ApiError::Mock("offline".to_string()));
        assert!(controller.refresh(snapshot));
        assert_eq!(controller.counts(), VotesCount::new(10, 10));
        assert_eq!(controller.user_vote(), VoteState::Down);
    }

    #[test]
    fn test_refresh_rejects_other_votable() {
        let mut controller = controller(3, 1, VoteState::None);
        let other = VotableSnapshot::new(
            VotableId::entry(Uuid::new_v4()),
            VotesCount::new(0, 0),
            VoteState::None,
        );
        assert!(!controller.refresh(other));
        assert_eq!(controller.counts(), VotesCount::new(3, 1));
    }

    #[test]
    fn test_fail_with_foreign_pending_vote_changes_nothing() {
        let mut a = controller(100, 50, VoteState::Down);
        let mut b = controller(3, 1, VoteState::None);
        let pending_a = a.begin_vote(&session(), VoteDirection::Up).unwrap();

        let error = b.fail(pending_a, ApiError::Mock("timeout".to_string()));

        assert!(matches!(
            error,
            VoteError::ForeignPendingVote { votable, pending }
                if votable == b.votable() && pending == a.votable()
        ));
        assert_eq!(b.counts(), VotesCount::new(3, 1));
        assert_eq!(b.user_vote(), VoteState::None);
        assert!(!b.is_pending());
    }

    #[test]
    fn test_confirm_with_foreign_pending_vote_changes_nothing() {
        let mut a = controller(3, 1, VoteState::None);
        let mut b = controller(3, 1, VoteState::None);
        let pending_a = a.begin_vote(&session(), VoteDirection::Up).unwrap();
        let pending_b = b.begin_vote(&session(), VoteDirection::Down).unwrap();

        let result = a.confirm(
            pending_b,
            VoteConfirmation::new(VotesCount::new(9, 9), VoteState::Down),
        );
        assert!(matches!(result, Err(VoteError::ForeignPendingVote { .. })));
        assert_eq!(a.counts(), VotesCount::new(4, 1));
        assert!(a.is_pending());

        // The owner can still resolve its own vote.
        let outcome = a
            .confirm(
                pending_a,
                VoteConfirmation::new(VotesCount::new(4, 1), VoteState::Up),
            )
            .unwrap();
        assert_eq!(outcome.user_vote, VoteState::Up);
        assert!(!a.is_pending());
    }

    #[test]
    fn test_confirm_refused_when_nothing_is_pending() {
        let mut controller = controller(3, 1, VoteState::None);
        let mut copy = controller.clone();
        let pending = copy.begin_vote(&session(), VoteDirection::Up).unwrap();

        // Same votable, but this controller never started the vote.
        let result = controller.confirm(
            pending,
            VoteConfirmation::new(VotesCount::new(4, 1), VoteState::Up),
        );

        assert!(matches!(result, Err(VoteError::ForeignPendingVote { .. })));
        assert_eq!(controller.counts(), VotesCount::new(3, 1));
        assert_eq!(controller.user_vote(), VoteState::None);
    }

    #[test]
    fn test_confirm_reports_accepted_suggestion() {
        let mut controller = VoteController::new(
            VotableSnapshot::new(
                VotableId::suggestion(Uuid::new_v4()),
                VotesCount::new(4, 0),
                VoteState::None,
            )
            .with_status(VotableStatus::Suggestion(SuggestionStatus::Pending)),
        );
        let pending = controller.begin_vote(&session(), VoteDirection::Up).unwrap();

        let confirmation = VoteConfirmation::new(VotesCount::new(5, 0), VoteState::Up)
            .with_status(VotableStatus::Suggestion(SuggestionStatus::Accepted))
            .accepted();
        let outcome = controller.confirm(pending, confirmation).unwrap();

        assert!(outcome.accepted);
        assert!(outcome.status_changed);
    }
}
