use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::data::{DataSource, ReferenceData};
use crate::models::{
    AnswerRecord, AppState, Case, Declension, LENGTH_CHOICES, Question, QuizSettings,
    QuizSummary, SettingsError,
};
use crate::quiz::{DEFAULT_SLOT_ATTEMPTS, QuizGenerator};

const EMPTY_QUIZ_NOTICE: &str =
    "No questions could be generated for this selection. Choose other declensions or cases.";

/// A line of the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupRow {
    Declension(Declension),
    Case(Case),
    Length,
}

impl SetupRow {
    pub fn all() -> impl Iterator<Item = SetupRow> {
        Declension::ALL
            .into_iter()
            .map(SetupRow::Declension)
            .chain(Case::ALL.into_iter().map(SetupRow::Case))
            .chain(std::iter::once(SetupRow::Length))
    }

    pub fn count() -> usize {
        Declension::ALL.len() + Case::ALL.len() + 1
    }
}

/// Selections on the setup screen.
#[derive(Debug, Clone)]
pub struct SetupForm {
    declensions: [bool; Declension::ALL.len()],
    cases: [bool; Case::ALL.len()],
    lengths: Vec<usize>,
    length_index: usize,
    cursor: usize,
}

impl SetupForm {
    pub fn from_settings(settings: &QuizSettings) -> Self {
        let mut declensions = [false; Declension::ALL.len()];
        for declension in settings.declensions() {
            declensions[declension_index(*declension)] = true;
        }

        let mut cases = [false; Case::ALL.len()];
        for case in settings.cases() {
            cases[case_index(*case)] = true;
        }

        let mut lengths = LENGTH_CHOICES.to_vec();
        if !lengths.contains(&settings.length()) {
            lengths.push(settings.length());
            lengths.sort_unstable();
        }
        let length_index = lengths
            .iter()
            .position(|length| *length == settings.length())
            .unwrap_or_default();

        Self {
            declensions,
            cases,
            lengths,
            length_index,
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_row(&self) -> SetupRow {
        SetupRow::all().nth(self.cursor).unwrap_or(SetupRow::Length)
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % SetupRow::count();
    }

    pub fn move_up(&mut self) {
        self.cursor = (self.cursor + SetupRow::count() - 1) % SetupRow::count();
    }

    /// Toggles the row under the cursor; on the length row, picks the next
    /// length.
    pub fn toggle(&mut self) {
        match self.cursor_row() {
            SetupRow::Declension(declension) => {
                let selected = &mut self.declensions[declension_index(declension)];
                *selected = !*selected;
            }
            SetupRow::Case(case) => {
                let selected = &mut self.cases[case_index(case)];
                *selected = !*selected;
            }
            SetupRow::Length => self.cycle_length(true),
        }
    }

    pub fn cycle_length(&mut self, forward: bool) {
        let count = self.lengths.len();
        self.length_index = if forward {
            (self.length_index + 1) % count
        } else {
            (self.length_index + count - 1) % count
        };
    }

    pub fn is_selected(&self, row: SetupRow) -> bool {
        match row {
            SetupRow::Declension(declension) => self.declensions[declension_index(declension)],
            SetupRow::Case(case) => self.cases[case_index(case)],
            SetupRow::Length => true,
        }
    }

    pub fn length(&self) -> usize {
        self.lengths[self.length_index]
    }

    pub fn settings(&self) -> Result<QuizSettings, SettingsError> {
        let declensions = Declension::ALL
            .into_iter()
            .filter(|declension| self.declensions[declension_index(*declension)]);
        let cases = Case::ALL
            .into_iter()
            .filter(|case| self.cases[case_index(*case)]);
        QuizSettings::new(declensions, cases, self.length())
    }
}

fn declension_index(declension: Declension) -> usize {
    usize::from(declension.number()) - 1
}

fn case_index(case: Case) -> usize {
    Case::ALL
        .iter()
        .position(|candidate| *candidate == case)
        .unwrap_or_default()
}

pub struct App {
    pub state: AppState,
    data: ReferenceData,
    rng: ChaCha8Rng,
    attempts: usize,
    setup: SetupForm,
    settings: QuizSettings,
    questions: Vec<Question>,
    current_question_index: usize,
    selected_option: usize,
    answers: Vec<Option<usize>>,
    result_scroll: usize,
    notice: Option<String>,
}

impl App {
    pub fn new(data: ReferenceData, settings: QuizSettings, rng: ChaCha8Rng) -> Self {
        let notice = data
            .is_fallback()
            .then(|| "Reference data could not be loaded; no questions are available.".to_string());

        Self {
            state: AppState::Setup,
            data,
            rng,
            attempts: DEFAULT_SLOT_ATTEMPTS,
            setup: SetupForm::from_settings(&settings),
            settings,
            questions: Vec::new(),
            current_question_index: 0,
            selected_option: 0,
            answers: Vec::new(),
            result_scroll: 0,
            notice,
        }
    }

    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn setup(&self) -> &SetupForm {
        &self.setup
    }

    pub fn setup_mut(&mut self) -> &mut SetupForm {
        &mut self.setup
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn data_source(&self) -> &DataSource {
        self.data.source()
    }

    /// Starts a quiz from the setup selections.
    ///
    /// Stays on the setup screen with a notice when the selection is invalid
    /// or produces no questions.
    pub fn start_quiz(&mut self) {
        match self.setup.settings() {
            Ok(settings) => {
                self.settings = settings;
                self.begin();
            }
            Err(err) => self.notice = Some(format!("Please {err}.")),
        }
    }

    /// Starts a freshly generated quiz with the last settings.
    pub fn retake(&mut self) {
        self.begin();
    }

    /// Returns to the setup screen.
    pub fn new_quiz(&mut self) {
        self.state = AppState::Setup;
        self.notice = None;
    }

    fn begin(&mut self) {
        let questions = QuizGenerator::new(&self.data, &self.settings, &mut self.rng)
            .with_attempts(self.attempts)
            .generate_quiz();

        if questions.is_empty() {
            self.state = AppState::Setup;
            self.notice = Some(EMPTY_QUIZ_NOTICE.to_string());
            return;
        }

        info!(questions = questions.len(), "quiz started");
        self.answers = vec![None; questions.len()];
        self.questions = questions;
        self.current_question_index = 0;
        self.selected_option = 0;
        self.result_scroll = 0;
        self.notice = None;
        self.state = AppState::Quiz;
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_question_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    fn option_count(&self) -> usize {
        self.current_question()
            .map_or(0, |question| question.options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn submit_answer(&mut self) {
        if self.state != AppState::Quiz || self.option_count() == 0 {
            return;
        }

        self.answers[self.current_question_index] = Some(self.selected_option);
        self.current_question_index += 1;

        if self.current_question_index >= self.questions.len() {
            self.current_question_index = self.questions.len() - 1;
            self.state = AppState::Result;
            let summary = self.summary();
            info!(
                correct = summary.correct,
                total = summary.total,
                "quiz finished"
            );
        } else {
            self.selected_option = self.answers[self.current_question_index].unwrap_or(0);
        }
    }

    /// Goes back one question, restoring the answer given there.
    pub fn previous_question(&mut self) {
        if self.current_question_index > 0 {
            self.current_question_index -= 1;
            self.selected_option = self.answers[self.current_question_index].unwrap_or(0);
        }
    }

    pub fn answer_records(&self) -> Vec<AnswerRecord> {
        self.questions
            .iter()
            .zip(self.answers.iter())
            .map(|(question, answer)| AnswerRecord::new(question, *answer))
            .collect()
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary::from_records(&self.answer_records())
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.questions.len() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}
