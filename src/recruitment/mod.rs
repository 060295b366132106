//! Recruitment DM questionnaire.
//!
//! A linear per-user interview advanced by ordinary direct messages: the
//! message handler routes every DM from a user with an open interview into
//! [`interview::InterviewStore::advance`], and the command layer renders the
//! resulting step outcome back to the applicant.

pub mod interview;
