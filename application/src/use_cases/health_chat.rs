//! Health chat use case.
//!
//! [`HealthChatSession`] owns one conversation with the health assistant.
//! A submission appends the user's message immediately, then a spawned task
//! waits out the simulated latency, asks the [`ResponseGenerator`] for a
//! reply and appends it. While that task runs the session is pending and
//! further submissions are rejected, not queued.
//!
//! ```text
//! Idle ──submit──▶ Pending ──reply appended──▶ Idle
//!                     │
//!                     └─ submit ⇒ Rejected(Pending)
//! ```

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::response_generator::ResponseGenerator;
use crate::ports::timing::{Clock, DelayPolicy, Timer};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use wellness_domain::core::string::preview;
use wellness_domain::health::{APOLOGY, quick_question};
use wellness_domain::{Conversation, DomainError, Message, MessageCategory, SessionState};

/// Why a submission was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Text was empty or whitespace
    Empty,
    /// A reply is still pending
    Pending,
}

/// Result of [`HealthChatSession::submit`]
#[derive(Debug)]
pub enum SubmitOutcome {
    Accepted(PendingReply),
    Rejected(RejectReason),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    pub fn into_pending(self) -> Option<PendingReply> {
        match self {
            SubmitOutcome::Accepted(pending) => Some(pending),
            SubmitOutcome::Rejected(_) => None,
        }
    }
}

/// Handle to a reply being generated
///
/// Dropping the handle does not cancel the reply: it is still appended.
#[derive(Debug)]
pub struct PendingReply {
    user_message: Message,
    delay: Duration,
    handle: JoinHandle<Option<Message>>,
}

impl PendingReply {
    /// The user message appended by the submission
    pub fn user_message(&self) -> &Message {
        &self.user_message
    }

    /// Simulated latency chosen for this reply
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait for the assistant message to be appended
    pub async fn wait(self) -> Option<Message> {
        match self.handle.await {
            Ok(message) => message,
            Err(e) => {
                warn!("Reply task ended abnormally: {}", e);
                None
            }
        }
    }
}

/// Shared pieces the reply task needs
#[derive(Clone)]
struct ReplyContext {
    conversation: Arc<Mutex<Conversation>>,
    responder: Arc<dyn ResponseGenerator>,
    timer: Arc<dyn Timer>,
    clock: Arc<dyn Clock>,
    logger: Arc<dyn ConversationLogger>,
}

/// One health assistant conversation.
///
/// Cheap to clone; clones share the same conversation.
#[derive(Clone)]
pub struct HealthChatSession {
    ctx: ReplyContext,
    delay: Arc<dyn DelayPolicy>,
}

impl HealthChatSession {
    /// Start a conversation seeded with the assistant greeting
    pub fn initialize(
        responder: Arc<dyn ResponseGenerator>,
        timer: Arc<dyn Timer>,
        delay: Arc<dyn DelayPolicy>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let conversation = Conversation::new(clock.now());
        Self {
            ctx: ReplyContext {
                conversation: Arc::new(Mutex::new(conversation)),
                responder,
                timer,
                clock,
                logger: Arc::new(NoConversationLogger),
            },
            delay,
        }
    }

    /// Attach a conversation logger. The greeting is logged right away.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        for message in self.messages() {
            logger.log(ConversationEvent::message(&message));
        }
        self.ctx.logger = logger;
        self
    }

    /// Snapshot of the transcript, oldest first
    pub fn messages(&self) -> Vec<Message> {
        self.ctx.lock().messages().to_vec()
    }

    pub fn is_pending(&self) -> bool {
        self.ctx.lock().is_pending()
    }

    pub fn state(&self) -> SessionState {
        self.ctx.lock().state()
    }

    /// Text staged for the next submission
    pub fn staged_input(&self) -> String {
        self.ctx.lock().staged_input().to_string()
    }

    /// Clear the staged text and return it
    pub fn take_staged_input(&self) -> String {
        self.ctx.lock().take_staged_input()
    }

    /// Stage text without submitting it
    pub fn quick_fill(&self, question: &str) {
        self.ctx.lock().stage(question);
    }

    /// Stage one of the preset questions by zero-based index
    pub fn quick_fill_preset(&self, index: usize) -> Option<&'static str> {
        let question = quick_question(index)?;
        self.quick_fill(question);
        Some(question)
    }

    /// Submit text.
    ///
    /// Blank text, or any text while a reply is pending, is a no-op. On
    /// acceptance the user message is already in the transcript when this
    /// returns and the session is pending until the reply lands.
    ///
    /// Must be called within a Tokio runtime.
    pub fn submit(&self, text: &str) -> SubmitOutcome {
        let now = self.ctx.clock.now();
        let begun = self
            .ctx
            .lock()
            .begin_exchange(text, now)
            .cloned();

        let user_message = match begun {
            Ok(message) => message,
            Err(DomainError::ResponsePending) => {
                debug!("Submission ignored: reply pending");
                return SubmitOutcome::Rejected(RejectReason::Pending);
            }
            Err(_) => {
                debug!("Submission ignored: empty text");
                return SubmitOutcome::Rejected(RejectReason::Empty);
            }
        };

        info!(
            "Message {} submitted: {}",
            user_message.id(),
            preview(user_message.content(), 60)
        );
        self.ctx.logger.log(ConversationEvent::message(&user_message));

        let delay = self.delay.next_delay();
        debug!("Simulated reply latency: {:?}", delay);

        let ctx = self.ctx.clone();
        let text = user_message.content().to_string();
        let handle = tokio::spawn(async move { ctx.resolve(text, delay).await });

        SubmitOutcome::Accepted(PendingReply {
            user_message,
            delay,
            handle,
        })
    }

    /// Submit whatever is staged
    pub fn submit_staged(&self) -> SubmitOutcome {
        let staged = self.staged_input();
        self.submit(&staged)
    }

    /// Submit and wait for the reply. `None` if the submission was rejected.
    pub async fn ask(&self, text: &str) -> Option<Message> {
        match self.submit(text) {
            SubmitOutcome::Accepted(pending) => pending.wait().await,
            SubmitOutcome::Rejected(_) => None,
        }
    }
}

impl ReplyContext {
    fn lock(&self) -> MutexGuard<'_, Conversation> {
        self.conversation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Wait, generate, append. Always clears the pending flag.
    async fn resolve(self, text: String, delay: Duration) -> Option<Message> {
        self.timer.sleep(delay).await;

        let generated = AssertUnwindSafe(self.responder.respond(&text))
            .catch_unwind()
            .await;

        let (content, category) = match generated {
            Ok(Ok(reply)) => {
                debug!("Reply topic: {}", reply.topic);
                (reply.content, MessageCategory::Reply(reply.topic))
            }
            Ok(Err(e)) => {
                warn!("Reply generation failed: {}", e);
                self.log_failure(&e.to_string());
                (APOLOGY.to_string(), MessageCategory::Apology)
            }
            Err(_) => {
                warn!("Reply generation panicked");
                self.log_failure("responder panicked");
                (APOLOGY.to_string(), MessageCategory::Apology)
            }
        };

        let now = self.clock.now();
        let appended = self
            .lock()
            .complete_exchange(content, category, now)
            .cloned();

        match appended {
            Ok(message) => {
                self.logger.log(ConversationEvent::message(&message));
                Some(message)
            }
            Err(e) => {
                warn!("Reply dropped: {}", e);
                None
            }
        }
    }

    fn log_failure(&self, error: &str) {
        self.logger.log(ConversationEvent::new(
            "response_failed",
            serde_json::json!({ "error": error }),
        ));
    }
}
