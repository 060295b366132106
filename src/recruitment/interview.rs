use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Time allowed per answer before the interview is cancelled.
pub const ANSWER_TIMEOUT: Duration = Duration::from_secs(120);

/// Field an answer is stored under.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum QuestionKey {
    Surname,
    Ign,
    Role,
    Rank,
    TrackerLink,
}

struct Question {
    key: QuestionKey,
    prompt: &'static str,
    required: bool,
}

const QUESTIONS: &[Question] = &[
    Question {
        key: QuestionKey::Surname,
        prompt: "**What is your Surname (Last Name)?**\n_(Type \"skip\" to skip)_",
        required: false,
    },
    Question {
        key: QuestionKey::Ign,
        prompt: "**What is your In-Game Name (IGN)?**",
        required: true,
    },
    Question {
        key: QuestionKey::Role,
        prompt: "**What role do you play?**\n_(e.g., Duelist, Controller, Initiator, Sentinel)_\n_(Type \"skip\" to skip)_",
        required: false,
    },
    Question {
        key: QuestionKey::Rank,
        prompt: "**What is your current rank?**\n_(e.g., Diamond 2, Immortal 1)_\n_(Type \"skip\" to skip)_",
        required: false,
    },
    Question {
        key: QuestionKey::TrackerLink,
        prompt: "**Provide your Tracker link:**\n_(e.g., https://tracker.gg/valorant/profile/...)_\n_(Type \"skip\" to skip)_",
        required: false,
    },
];

/// Answers collected by a completed interview.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompletedInterview {
    pub surname: Option<String>,
    pub ign: String,
    pub role: Option<String>,
    pub rank: Option<String>,
    pub tracker_link: Option<String>,
}

/// What the caller should do after feeding one answer in.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// Send the next question.
    AskNext { prompt: &'static str },
    /// The question was required; warn and collect one more answer for it.
    Retry { notice: &'static str },
    /// The interview ended without an application; send the notice.
    Cancelled { notice: &'static str },
    /// Every question is answered; persist the application.
    Completed(CompletedInterview),
}

/// One user's in-flight questionnaire.
struct Interview {
    index: usize,
    answers: CompletedInterview,
    deadline: Instant,
    /// Set after a required question was skipped once; the next answer is
    /// accepted verbatim.
    retried: bool,
}

impl Interview {
    fn new(now: Instant) -> Self {
        Self {
            index: 0,
            answers: CompletedInterview::default(),
            deadline: now + ANSWER_TIMEOUT,
            retried: false,
        }
    }

    fn record(&mut self, key: QuestionKey, value: Option<String>) {
        match key {
            QuestionKey::Surname => self.answers.surname = value,
            QuestionKey::Ign => self.answers.ign = value.unwrap_or_default(),
            QuestionKey::Role => self.answers.role = value,
            QuestionKey::Rank => self.answers.rank = value,
            QuestionKey::TrackerLink => self.answers.tracker_link = value,
        }
    }

    fn advance(&mut self, response: &str, now: Instant) -> StepOutcome {
        if now > self.deadline {
            return StepOutcome::Cancelled {
                notice: "⏰ You took too long to respond. Application cancelled.",
            };
        }

        let response = response.trim();
        if response.is_empty() || response.eq_ignore_ascii_case("cancel") {
            return StepOutcome::Cancelled {
                notice: "❌ Application cancelled.",
            };
        }

        let question = &QUESTIONS[self.index];
        let skipping = response.eq_ignore_ascii_case("skip");

        if skipping && question.required && !self.retried {
            self.retried = true;
            self.deadline = now + ANSWER_TIMEOUT;
            return StepOutcome::Retry {
                notice:
                    "⚠️ This field is required and cannot be skipped. Please provide an answer.",
            };
        }

        if skipping && !question.required {
            self.record(question.key, None);
        } else {
            self.record(question.key, Some(response.to_string()));
        }

        self.index += 1;
        self.retried = false;
        self.deadline = now + ANSWER_TIMEOUT;

        match QUESTIONS.get(self.index) {
            Some(next) => StepOutcome::AskNext {
                prompt: next.prompt,
            },
            None => StepOutcome::Completed(self.answers.clone()),
        }
    }
}

/// Per-user store of in-flight interviews.
///
/// Answer deadlines are enforced lazily: an answer arriving past its deadline
/// cancels the interview with the timeout notice.
#[derive(Default)]
pub struct InterviewStore {
    interviews: Mutex<HashMap<u64, Interview>>,
}

impl InterviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an interview for a user and returns the first question.
    ///
    /// A previous unfinished interview for the same user is discarded.
    pub async fn begin(&self, user_id: u64) -> &'static str {
        self.interviews
            .lock()
            .await
            .insert(user_id, Interview::new(Instant::now()));
        QUESTIONS[0].prompt
    }

    /// Feeds one DM into the user's interview, if any.
    ///
    /// Returns `None` when the user has no open interview. Terminal outcomes
    /// (cancelled, completed) close the interview.
    pub async fn advance(&self, user_id: u64, response: &str) -> Option<StepOutcome> {
        self.advance_at(user_id, response, Instant::now()).await
    }

    async fn advance_at(
        &self,
        user_id: u64,
        response: &str,
        now: Instant,
    ) -> Option<StepOutcome> {
        let mut interviews = self.interviews.lock().await;
        let interview = interviews.get_mut(&user_id)?;

        let outcome = interview.advance(response, now);
        if matches!(
            outcome,
            StepOutcome::Cancelled { .. } | StepOutcome::Completed(_)
        ) {
            interviews.remove(&user_id);
        }

        Some(outcome)
    }
}
