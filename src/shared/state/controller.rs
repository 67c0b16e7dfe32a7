//! Root application state machine
//!
//! Every user action goes through `AppController`. Each busy flag is raised
//! when its operation starts and lowered once it settles, whatever the
//! outcome. Uploads and deletes are always followed by a full refetch so
//! the document list mirrors the last completed server round-trip.

use std::rc::Rc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::domain::models::{ChatMessage, DocumentFile, Theme};
use crate::shared::errors::{AppError, Operation, Result};
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::DocumentApi;

use super::app_state::UploadStatus;
use super::store::{ConfirmPrompt, ErrorTimer, StateStore};

pub const ERROR_LOAD_DOCUMENTS: &str = "Failed to load documents";
pub const ERROR_UPLOAD_FALLBACK: &str = "Failed to upload document. Please try again.";
pub const ERROR_DELETE: &str = "Failed to delete document";
pub const ERROR_QUESTION: &str = "Failed to get answer";

/// Assistant turn shown in place of an answer when the question fails
pub const ASSISTANT_ERROR_REPLY: &str =
    "Sorry, I encountered an error while processing your question. Please try again.";

pub fn delete_prompt(filename: &str) -> String {
    format!("Delete \"{filename}\"?")
}

#[derive(Clone)]
pub struct AppController<S: StateStore> {
    store: S,
    api: Rc<dyn DocumentApi>,
    confirm: Rc<dyn ConfirmPrompt>,
    timer: Rc<dyn ErrorTimer>,
    error_display: Duration,
}

impl<S: StateStore> AppController<S> {
    pub fn new(
        store: S,
        config: &AppConfig,
        api: Rc<dyn DocumentApi>,
        confirm: Rc<dyn ConfirmPrompt>,
        timer: Rc<dyn ErrorTimer>,
    ) -> Self {
        Self {
            store,
            api,
            confirm,
            timer,
            error_display: config.error_display,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the banner and (re)start its auto-clear timer.
    /// A timer started for an older banner leaves the newer one alone.
    pub fn show_error(&self, message: impl Into<String>) {
        let generation = self.store.update(|s| s.set_error(message));
        let store = self.store.clone();
        self.timer.schedule(
            self.error_display,
            Box::new(move || {
                store.update(|s| s.expire_error(generation));
            }),
        );
    }

    /// Refuse an action whose kind is already in flight. The running
    /// operation is left alone; the user sees why nothing happened.
    fn reject(&self, operation: Operation, tag: LogOperation) -> AppError {
        logging::log_operation_rejected(tag);
        let error = AppError::OperationInFlight(operation);
        self.show_error(error.to_string());
        error
    }

    /// Refresh the document list from the backend. No retry.
    pub async fn fetch_documents(&self) -> Result<()> {
        match self.api.get_documents().await {
            Ok(documents) => {
                logging::log_documents_loaded(documents.len());
                self.store.update(|s| s.documents = documents);
                Ok(())
            }
            Err(e) => {
                logging::log_operation_error(LogOperation::DocumentFetch, &e);
                self.show_error(ERROR_LOAD_DOCUMENTS);
                Err(e)
            }
        }
    }

    pub fn toggle_theme(&self) -> Theme {
        self.store.update(|s| {
            s.theme = s.theme.toggled();
            s.theme
        })
    }

    pub fn open_sidebar(&self) {
        self.store.update(|s| s.is_mobile_open = true);
    }

    pub fn close_sidebar(&self) {
        self.store.update(|s| s.is_mobile_open = false);
    }

    /// Upload a document, then refetch the list.
    /// Rejected while another upload is running.
    pub async fn upload(&self, file: DocumentFile) -> Result<()> {
        let started = self.store.update(|s| {
            if s.is_uploading() {
                return false;
            }
            s.upload = UploadStatus::Uploading { progress: 0 };
            s.clear_error();
            true
        });
        if !started {
            return Err(self.reject(Operation::Upload, LogOperation::Upload));
        }

        let filename = file.filename.clone();
        logging::log_upload_start(&filename, file.size());

        let store = self.store.clone();
        let on_progress = move |progress: u8| {
            store.update(|s| {
                if s.is_uploading() {
                    s.upload = UploadStatus::Uploading {
                        progress: progress.min(100),
                    };
                }
            });
        };

        let outcome = match self.api.upload_document(file, &on_progress).await {
            Ok(()) => {
                logging::log_upload_success(&filename);
                // A failed refetch reports itself through the banner
                let _ = self.fetch_documents().await;
                Ok(())
            }
            Err(e) => {
                logging::log_operation_error(LogOperation::Upload, &e);
                self.show_error(e.detail().unwrap_or(ERROR_UPLOAD_FALLBACK).to_string());
                Err(e)
            }
        };

        self.store.update(|s| s.upload = UploadStatus::Idle);
        outcome
    }

    /// Delete a document after interactive confirmation, then refetch.
    /// Declining leaves the state untouched.
    pub async fn delete(&self, filename: &str) -> Result<()> {
        if self.store.inspect(|s| s.is_deleting) {
            return Err(self.reject(Operation::Delete, LogOperation::Delete));
        }

        if !self.confirm.confirm(&delete_prompt(filename)).await {
            logging::log_delete_declined(filename);
            return Ok(());
        }

        let started = self.store.update(|s| {
            if s.is_deleting {
                return false;
            }
            s.is_deleting = true;
            s.clear_error();
            true
        });
        if !started {
            return Err(self.reject(Operation::Delete, LogOperation::Delete));
        }

        let outcome = match self.api.delete_document(filename).await {
            Ok(()) => {
                logging::log_delete_success(filename);
                let _ = self.fetch_documents().await;
                Ok(())
            }
            Err(e) => {
                logging::log_operation_error(LogOperation::Delete, &e);
                self.show_error(ERROR_DELETE);
                Err(e)
            }
        };

        self.store.update(|s| s.is_deleting = false);
        outcome
    }

    /// Append the user's turn, ask the backend and append its answer.
    /// A failed question still produces an assistant turn.
    pub async fn send_message(&self, content: String) -> Result<()> {
        if content.trim().is_empty() {
            return Ok(());
        }

        let started = self.store.update(|s| {
            if s.is_loading {
                return false;
            }
            s.messages.push(ChatMessage::user(content.clone()));
            s.is_loading = true;
            s.clear_error();
            true
        });
        if !started {
            return Err(self.reject(Operation::Question, LogOperation::Question));
        }

        let outcome = match self.api.ask_question(&content).await {
            Ok(response) => {
                let reply = response.into_message();
                logging::log_question_answered(reply.sources.len());
                self.store.update(|s| s.messages.push(reply));
                Ok(())
            }
            Err(e) => {
                logging::log_operation_error(LogOperation::Question, &e);
                self.store.update(|s| {
                    s.messages
                        .push(ChatMessage::assistant(ASSISTANT_ERROR_REPLY, Vec::new()))
                });
                self.show_error(ERROR_QUESTION);
                Err(e)
            }
        };

        self.store.update(|s| s.is_loading = false);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{AskResponse, Document, Role, Source};
    use crate::shared::state::AppState;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    type Store = Rc<RefCell<AppState>>;

    /// Scripted backend that also records what the app state looked like
    /// while each call was in flight
    struct FakeApi {
        store: Store,
        documents: RefCell<VecDeque<Result<Vec<Document>>>>,
        upload_result: RefCell<Option<AppError>>,
        upload_progress: Vec<u8>,
        delete_result: RefCell<Option<AppError>>,
        answer: RefCell<Option<Result<AskResponse>>>,
        fetch_calls: Cell<usize>,
        deleted: RefCell<Vec<String>>,
        questions: RefCell<Vec<String>>,
        seen_progress: RefCell<Vec<u8>>,
        seen_flags: RefCell<Vec<(bool, bool, bool)>>,
    }

    impl FakeApi {
        fn new(store: Store) -> Self {
            Self {
                store,
                documents: RefCell::new(VecDeque::new()),
                upload_result: RefCell::new(None),
                upload_progress: vec![25, 75, 100],
                delete_result: RefCell::new(None),
                answer: RefCell::new(None),
                fetch_calls: Cell::new(0),
                deleted: RefCell::new(Vec::new()),
                questions: RefCell::new(Vec::new()),
                seen_progress: RefCell::new(Vec::new()),
                seen_flags: RefCell::new(Vec::new()),
            }
        }

        fn record_flags(&self) {
            let s = self.store.borrow();
            self.seen_flags
                .borrow_mut()
                .push((s.is_uploading(), s.is_deleting, s.is_loading));
        }

        fn next_documents(&self, result: Result<Vec<Document>>) {
            self.documents.borrow_mut().push_back(result);
        }
    }

    #[async_trait(?Send)]
    impl DocumentApi for FakeApi {
        async fn get_documents(&self) -> Result<Vec<Document>> {
            self.fetch_calls.set(self.fetch_calls.get() + 1);
            self.documents
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn upload_document(&self, _file: DocumentFile, on_progress: &dyn Fn(u8)) -> Result<()> {
            self.record_flags();
            for progress in &self.upload_progress {
                on_progress(*progress);
                self.seen_progress
                    .borrow_mut()
                    .push(self.store.borrow().upload_progress());
            }
            match self.upload_result.borrow_mut().take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        async fn delete_document(&self, filename: &str) -> Result<()> {
            self.record_flags();
            self.deleted.borrow_mut().push(filename.to_string());
            match self.delete_result.borrow_mut().take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        async fn ask_question(&self, content: &str) -> Result<AskResponse> {
            self.record_flags();
            self.questions.borrow_mut().push(content.to_string());
            self.answer.borrow_mut().take().unwrap_or_else(|| {
                Ok(AskResponse {
                    answer: "ok".to_string(),
                    sources: None,
                })
            })
        }
    }

    struct FakeConfirm {
        answer: bool,
        prompts: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ConfirmPrompt for FakeConfirm {
        async fn confirm(&self, message: &str) -> bool {
            self.prompts.borrow_mut().push(message.to_string());
            self.answer
        }
    }

    /// Collects scheduled callbacks; tests fire them by hand
    #[derive(Default)]
    struct ManualTimer {
        pending: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
    }

    impl ManualTimer {
        fn fire_next(&self) {
            let (_, callback) = self.pending.borrow_mut().remove(0);
            callback();
        }
    }

    impl ErrorTimer for ManualTimer {
        fn schedule(&self, delay: Duration, on_elapsed: Box<dyn FnOnce()>) {
            self.pending.borrow_mut().push((delay, on_elapsed));
        }
    }

    struct Harness {
        controller: AppController<Store>,
        store: Store,
        api: Rc<FakeApi>,
        confirm: Rc<FakeConfirm>,
        timer: Rc<ManualTimer>,
    }

    fn harness_with_confirm(answer: bool) -> Harness {
        let store: Store = Rc::new(RefCell::new(AppState::default()));
        let api = Rc::new(FakeApi::new(store.clone()));
        let confirm = Rc::new(FakeConfirm {
            answer,
            prompts: RefCell::new(Vec::new()),
        });
        let timer = Rc::new(ManualTimer::default());
        let controller = AppController::new(
            store.clone(),
            &AppConfig::new("http://test"),
            api.clone(),
            confirm.clone(),
            timer.clone(),
        );
        Harness {
            controller,
            store,
            api,
            confirm,
            timer,
        }
    }

    fn harness() -> Harness {
        harness_with_confirm(true)
    }

    fn doc(name: &str, size: u64) -> Document {
        Document {
            filename: name.to_string(),
            size,
        }
    }

    fn file() -> DocumentFile {
        DocumentFile::new("report.pdf", vec![0u8; 2048])
    }

    #[tokio::test]
    async fn test_mount_fetch_populates_documents() {
        let h = harness();
        h.api.next_documents(Ok(vec![doc("a.pdf", 10)]));

        h.controller.fetch_documents().await.unwrap();

        assert_eq!(h.store.borrow().documents, vec![doc("a.pdf", 10)]);
        assert_eq!(h.store.borrow().error_message(), None);
    }

    #[tokio::test]
    async fn test_mount_fetch_failure_shows_banner() {
        let h = harness();
        h.api.next_documents(Err(AppError::Network("refused".into())));

        assert!(h.controller.fetch_documents().await.is_err());

        let state = h.store.borrow();
        assert!(state.documents.is_empty());
        assert_eq!(state.error_message(), Some(ERROR_LOAD_DOCUMENTS));
        assert_eq!(h.api.fetch_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_upload_success_refetches_once() {
        let h = harness();
        h.api.next_documents(Ok(vec![doc("report.pdf", 2048)]));

        h.controller.upload(file()).await.unwrap();

        assert_eq!(h.api.fetch_calls.get(), 1);
        assert_eq!(*h.api.seen_flags.borrow(), vec![(true, false, false)]);
        assert_eq!(*h.api.seen_progress.borrow(), vec![25, 75, 100]);

        let state = h.store.borrow();
        assert!(!state.is_uploading());
        assert_eq!(state.upload_progress(), 0);
        assert_eq!(state.documents, vec![doc("report.pdf", 2048)]);
    }

    #[tokio::test]
    async fn test_upload_clears_flag_when_refetch_fails() {
        let h = harness();
        h.api.next_documents(Err(AppError::Network("down".into())));

        assert!(h.controller.upload(file()).await.is_ok());

        assert_eq!(h.api.fetch_calls.get(), 1);
        let state = h.store.borrow();
        assert!(!state.is_uploading());
        assert_eq!(state.error_message(), Some(ERROR_LOAD_DOCUMENTS));
    }

    #[tokio::test]
    async fn test_upload_failure_prefers_server_detail() {
        let h = harness();
        *h.api.upload_result.borrow_mut() = Some(AppError::from_response(
            413,
            r#"{"detail":"File too large"}"#,
        ));

        assert!(h.controller.upload(file()).await.is_err());

        assert_eq!(h.api.fetch_calls.get(), 0);
        let state = h.store.borrow();
        assert_eq!(state.error_message(), Some("File too large"));
        assert!(!state.is_uploading());
    }

    #[tokio::test]
    async fn test_upload_failure_without_detail_uses_fallback() {
        let h = harness();
        *h.api.upload_result.borrow_mut() = Some(AppError::Network("reset".into()));

        assert!(h.controller.upload(file()).await.is_err());

        assert_eq!(h.store.borrow().error_message(), Some(ERROR_UPLOAD_FALLBACK));
    }

    #[tokio::test]
    async fn test_upload_clears_previous_error() {
        let h = harness();
        h.controller.show_error("old");

        h.controller.upload(file()).await.unwrap();

        assert_eq!(h.store.borrow().error_message(), None);
    }

    #[tokio::test]
    async fn test_second_upload_is_rejected() {
        let h = harness();
        h.store.borrow_mut().upload = UploadStatus::Uploading { progress: 40 };

        let result = h.controller.upload(file()).await;

        assert_eq!(result, Err(AppError::OperationInFlight(Operation::Upload)));
        assert!(h.api.seen_flags.borrow().is_empty());
        assert_eq!(h.store.borrow().upload_progress(), 40);
        assert_eq!(
            h.store.borrow().error_message(),
            Some("Another upload is already in progress")
        );
        assert_eq!(h.timer.pending.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_declined_delete_changes_nothing() {
        let h = harness_with_confirm(false);
        h.store.borrow_mut().documents = vec![doc("a.pdf", 1)];
        let before = h.store.borrow().clone();

        h.controller.delete("a.pdf").await.unwrap();

        assert_eq!(*h.store.borrow(), before);
        assert!(h.api.deleted.borrow().is_empty());
        assert_eq!(h.api.fetch_calls.get(), 0);
        assert_eq!(*h.confirm.prompts.borrow(), vec!["Delete \"a.pdf\"?".to_string()]);
    }

    #[tokio::test]
    async fn test_confirmed_delete_refetches() {
        let h = harness();
        h.store.borrow_mut().documents = vec![doc("a.pdf", 1), doc("b.txt", 2)];
        h.api.next_documents(Ok(vec![doc("b.txt", 2)]));

        h.controller.delete("a.pdf").await.unwrap();

        assert_eq!(*h.api.deleted.borrow(), vec!["a.pdf".to_string()]);
        assert_eq!(*h.api.seen_flags.borrow(), vec![(false, true, false)]);
        let state = h.store.borrow();
        assert_eq!(state.documents, vec![doc("b.txt", 2)]);
        assert!(!state.is_deleting);
    }

    #[tokio::test]
    async fn test_delete_failure_shows_generic_error() {
        let h = harness();
        h.store.borrow_mut().documents = vec![doc("a.pdf", 1)];
        *h.api.delete_result.borrow_mut() = Some(AppError::from_response(
            404,
            r#"{"detail":"Not found"}"#,
        ));

        assert!(h.controller.delete("a.pdf").await.is_err());

        let state = h.store.borrow();
        assert_eq!(state.error_message(), Some(ERROR_DELETE));
        assert!(!state.is_deleting);
        assert_eq!(state.documents, vec![doc("a.pdf", 1)]);
        assert_eq!(h.api.fetch_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_delete_while_deleting_is_rejected_before_prompt() {
        let h = harness();
        h.store.borrow_mut().is_deleting = true;

        let result = h.controller.delete("a.pdf").await;

        assert_eq!(result, Err(AppError::OperationInFlight(Operation::Delete)));
        assert!(h.confirm.prompts.borrow().is_empty());
        assert!(h.store.borrow().is_deleting);
        assert_eq!(
            h.store.borrow().error_message(),
            Some("Another delete is already in progress")
        );
    }

    #[tokio::test]
    async fn test_send_message_appends_answer_with_sources() {
        let h = harness();
        *h.api.answer.borrow_mut() = Some(Ok(AskResponse {
            answer: "The **answer**".to_string(),
            sources: Some(vec![Source::new("a.pdf", "3")]),
        }));

        h.controller.send_message("What?".to_string()).await.unwrap();

        assert_eq!(*h.api.seen_flags.borrow(), vec![(false, false, true)]);
        let state = h.store.borrow();
        assert!(!state.is_loading);
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].role, Role::User);
        assert_eq!(state.messages[0].content, "What?");
        assert_eq!(state.messages[1].role, Role::Assistant);
        assert_eq!(state.messages[1].content, "The **answer**");
        assert_eq!(state.messages[1].sources, vec![Source::new("a.pdf", "3")]);
    }

    #[tokio::test]
    async fn test_failed_question_appends_error_turn() {
        let h = harness();
        *h.api.answer.borrow_mut() = Some(Err(AppError::Http {
            status: 500,
            detail: None,
        }));

        assert!(h.controller.send_message("Why?".to_string()).await.is_err());

        let state = h.store.borrow();
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].content, "Why?");
        assert_eq!(state.messages[1].role, Role::Assistant);
        assert_eq!(state.messages[1].content, ASSISTANT_ERROR_REPLY);
        assert!(state.messages[1].sources.is_empty());
        assert_eq!(state.error_message(), Some(ERROR_QUESTION));
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_whitespace_message_is_ignored() {
        let h = harness();

        h.controller.send_message("   \n\t".to_string()).await.unwrap();

        assert!(h.store.borrow().messages.is_empty());
        assert!(h.api.questions.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_question_while_loading_is_rejected() {
        let h = harness();
        h.store.borrow_mut().is_loading = true;

        let result = h.controller.send_message("again".to_string()).await;

        assert_eq!(result, Err(AppError::OperationInFlight(Operation::Question)));
        let state = h.store.borrow();
        assert!(state.messages.is_empty());
        assert!(state.is_loading);
        assert_eq!(state.error_message(), Some("Another question is already in progress"));
    }

    #[test]
    fn test_error_banner_clears_after_timeout() {
        let h = harness();
        h.controller.show_error("boom");

        assert_eq!(h.timer.pending.borrow()[0].0, Duration::from_secs(5));
        h.timer.fire_next();

        assert_eq!(h.store.borrow().error_message(), None);
    }

    #[test]
    fn test_newer_error_survives_older_timer() {
        let h = harness();
        h.controller.show_error("first");
        h.controller.show_error("second");

        h.timer.fire_next();
        assert_eq!(h.store.borrow().error_message(), Some("second"));

        h.timer.fire_next();
        assert_eq!(h.store.borrow().error_message(), None);
    }

    #[test]
    fn test_toggle_theme_twice() {
        let h = harness();
        let original = h.store.borrow().theme;

        assert_eq!(h.controller.toggle_theme(), original.toggled());
        assert_eq!(h.controller.toggle_theme(), original);
    }

    #[test]
    fn test_mobile_sidebar() {
        let h = harness();
        h.controller.open_sidebar();
        assert!(h.store.borrow().is_mobile_open);
        h.controller.close_sidebar();
        assert!(!h.store.borrow().is_mobile_open);
    }
}
