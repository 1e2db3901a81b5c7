// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kartoteka-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kartoteka and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI shell (ratatui + crossterm).
//!
//! The shell is the render-contract collaborator of the navigator: it
//! registers a renderer that parks the dispatched [`Route`] in a shared slot,
//! and after every navigator call it drains the slot and binds the matching
//! view. Views call back into the navigator on user-driven transitions
//! (`navigate`) and on transient edits (`update_current`); they never hand a
//! route to another view directly.

use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use crate::api::{ApiError, StudentApi};
use crate::model::{
    canonical_index, ExamPeriodRecord, ExamRecord, PanelData, Route, StudentIndexRecord,
    StudentProfileRecord, StudentTab, StudyProgramRecord, SubjectRecord,
};
use crate::nav::panels::{PanelHydration, SelectionSource};
use crate::nav::HistoryNavigator;


const FOCUS_COLOR: Color = Color::LightGreen;
const HEADER_COLOR: Color = Color::Cyan;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const STATUS_COLOR: Color = Color::Yellow;

/// Runs the interactive shell against the given records backend.
pub fn run(api: impl StudentApi + 'static, history_depth: usize) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(Box::new(api), history_depth);
    app.start();

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

/// Slot the navigator's renderer writes into; the app drains it after every
/// navigator call on the same thread-of-control.
type RenderSlot = Rc<RefCell<Option<Route>>>;

struct App {
    api: Box<dyn StudentApi>,
    nav: HistoryNavigator,
    pending_route: RenderSlot,
    view: ActiveView,
    status: Option<String>,
    should_quit: bool,
}

enum ActiveView {
    Search(SearchView),
    Profile(ProfileView),
    ExamPeriods(ExamPeriodsView),
    ExamsByPeriod(ExamsView),
    StudyPrograms(ProgramsView),
    ProgramDetails(ProgramDetailsView),
}

impl App {
    fn new(api: Box<dyn StudentApi>, history_depth: usize) -> Self {
        let mut nav = HistoryNavigator::with_max_depth(history_depth);
        let pending_route: RenderSlot = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&pending_route);
        nav.set_renderer(move |route| {
            *slot.borrow_mut() = Some(route.clone());
        });

        Self {
            api,
            nav,
            pending_route,
            view: ActiveView::Search(SearchView::new(String::new())),
            status: None,
            should_quit: false,
        }
    }

    fn start(&mut self) {
        self.nav.set_initial(Route::search_by_index(""));
        self.apply_pending_route();
    }

    fn apply_pending_route(&mut self) {
        loop {
            let pending = self.pending_route.borrow_mut().take();
            let Some(route) = pending else {
                break;
            };
            self.apply_route(route);
        }
    }

    /// Binds the view matching a dispatched route. Every selection performed
    /// here is programmatic: replaying a route must not create history.
    fn apply_route(&mut self, route: Route) {
        match route {
            Route::SearchByIndex { search_text } => {
                self.view = ActiveView::Search(SearchView::new(search_text));
            }
            Route::StudentProfile { index, profile, tab } => {
                match &mut self.view {
                    ActiveView::Profile(view) => {
                        // Same id with a differing payload still rebinds, so a
                        // replayed route never leaves stale data on screen.
                        if view.index != index || view.profile != profile {
                            view.set_data(index, profile);
                        }
                    }
                    _ => self.view = ActiveView::Profile(ProfileView::new(index, profile)),
                }
                let ActiveView::Profile(view) = &mut self.view else {
                    unreachable!("profile view was just bound");
                };
                view.select_tab(tab, SelectionSource::Programmatic, &mut self.nav);
                // The toolkit may not fire a change event when the tab was
                // already selected, so loading never depends on one.
                if let Err(err) = view.ensure_selected_tab_loaded(self.api.as_ref()) {
                    self.status = Some(format!("Učitavanje kartice nije uspelo: {err}"));
                }
            }
            Route::ExamPeriods => match self.api.exam_periods() {
                Ok(periods) => self.view = ActiveView::ExamPeriods(ExamPeriodsView::new(periods)),
                Err(err) => self.status = Some(format!("Učitavanje rokova nije uspelo: {err}")),
            },
            Route::ExamsByPeriod { period } => match self.api.exams_by_period(period.id) {
                Ok(exams) => self.view = ActiveView::ExamsByPeriod(ExamsView::new(period, exams)),
                Err(err) => self.status = Some(format!("Učitavanje ispita nije uspelo: {err}")),
            },
            Route::StudyPrograms => match self.api.study_programs() {
                Ok(programs) => self.view = ActiveView::StudyPrograms(ProgramsView::new(programs)),
                Err(err) => self.status = Some(format!("Učitavanje programa nije uspelo: {err}")),
            },
            Route::ProgramDetails { program } => match self.api.program_subjects(program.id) {
                Ok(subjects) => {
                    self.view = ActiveView::ProgramDetails(ProgramDetailsView::new(program, subjects));
                }
                Err(err) => self.status = Some(format!("Učitavanje predmeta nije uspelo: {err}")),
            },
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.status = None;

        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Left => {
                    self.nav.back();
                    self.apply_pending_route();
                    return;
                }
                KeyCode::Right => {
                    self.nav.forward();
                    self.apply_pending_route();
                    return;
                }
                _ => {}
            }
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('[') => {
                    self.nav.back();
                    self.apply_pending_route();
                    return;
                }
                KeyCode::Char(']') => {
                    self.nav.forward();
                    self.apply_pending_route();
                    return;
                }
                KeyCode::Char('s') => {
                    self.nav.navigate(Route::search_by_index(""));
                    self.apply_pending_route();
                    return;
                }
                KeyCode::Char('e') => {
                    self.nav.navigate(Route::exam_periods());
                    self.apply_pending_route();
                    return;
                }
                KeyCode::Char('p') => {
                    self.nav.navigate(Route::study_programs());
                    self.apply_pending_route();
                    return;
                }
                _ => {}
            }
        }

        match &mut self.view {
            ActiveView::Search(view) => {
                view.handle_key(key, self.api.as_ref(), &mut self.nav, &mut self.status);
            }
            ActiveView::Profile(view) => match key.code {
                KeyCode::Char(c @ '1'..='5') => {
                    let tab = StudentTab::ALL[(c as usize) - ('1' as usize)];
                    view.select_tab(tab, SelectionSource::User, &mut self.nav);
                }
                KeyCode::Char('u') if view.tab == StudentTab::Progress => {
                    self.status = Some(match view.enroll_school_year(false, self.api.as_ref()) {
                        Ok(()) => "Godina upisana.".to_owned(),
                        Err(err) => format!("Upis godine nije uspeo: {err}"),
                    });
                }
                KeyCode::Char('o') if view.tab == StudentTab::Progress => {
                    self.status = Some(match view.enroll_school_year(true, self.api.as_ref()) {
                        Ok(()) => "Godina obnovljena.".to_owned(),
                        Err(err) => format!("Obnova godine nije uspela: {err}"),
                    });
                }
                _ => {}
            },
            ActiveView::ExamPeriods(view) => match key.code {
                KeyCode::Up => view.state.scroll_by(view.periods.len(), -1),
                KeyCode::Down => view.state.scroll_by(view.periods.len(), 1),
                KeyCode::Enter => {
                    if let Some(period) = view.selected().cloned() {
                        self.nav.navigate(Route::exams_by_period(period));
                    }
                }
                _ => {}
            },
            ActiveView::ExamsByPeriod(view) => match key.code {
                KeyCode::Up => view.state.scroll_by(view.exams.len(), -1),
                KeyCode::Down => view.state.scroll_by(view.exams.len(), 1),
                KeyCode::Esc => self.nav.navigate(Route::exam_periods()),
                _ => {}
            },
            ActiveView::StudyPrograms(view) => match key.code {
                KeyCode::Up => view.state.scroll_by(view.programs.len(), -1),
                KeyCode::Down => view.state.scroll_by(view.programs.len(), 1),
                KeyCode::Enter => {
                    if let Some(program) = view.selected().cloned() {
                        self.nav.navigate(Route::program_details(program));
                    }
                }
                _ => {}
            },
            ActiveView::ProgramDetails(view) => match key.code {
                KeyCode::Up => view.state.scroll_by(view.subjects.len(), -1),
                KeyCode::Down => view.state.scroll_by(view.subjects.len(), 1),
                KeyCode::Esc => self.nav.navigate(Route::study_programs()),
                _ => {}
            },
        }

        self.apply_pending_route();
    }
}

trait ScrollBy {
    fn scroll_by(&mut self, len: usize, delta: i64);
}

impl ScrollBy for ListState {
    fn scroll_by(&mut self, len: usize, delta: i64) {
        if len == 0 {
            self.select(None);
            return;
        }
        let current = self.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, len as i64 - 1);
        self.select(Some(next as usize));
    }
}

// ---- search ----

/// What the free-text query is matched against when it carries no digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Name,
    School,
}

struct SearchView {
    input: String,
    mode: SearchMode,
    results: Vec<StudentIndexRecord>,
    results_state: ListState,
    message: Option<String>,
}

impl SearchView {
    fn new(input: String) -> Self {
        Self {
            input,
            mode: SearchMode::Name,
            results: Vec::new(),
            results_state: ListState::default(),
            message: None,
        }
    }

    fn handle_key(
        &mut self,
        key: KeyEvent,
        api: &dyn StudentApi,
        nav: &mut HistoryNavigator,
        status: &mut Option<String>,
    ) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                self.persist_text(nav);
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.persist_text(nav);
            }
            KeyCode::Tab => {
                self.mode = match self.mode {
                    SearchMode::Name => SearchMode::School,
                    SearchMode::School => SearchMode::Name,
                };
            }
            KeyCode::Up => self.results_state.scroll_by(self.results.len(), -1),
            KeyCode::Down => self.results_state.scroll_by(self.results.len(), 1),
            KeyCode::Enter => {
                if let Some(selected) = self.selected_result().cloned() {
                    open_student(&selected.canonical(), api, nav, status);
                } else {
                    self.submit(api, nav, status);
                }
            }
            _ => {}
        }
    }

    /// Typing is a transient in-place edit: the route is updated without a
    /// history entry so `back()` later restores what was typed.
    fn persist_text(&mut self, nav: &mut HistoryNavigator) {
        let updated = nav.current().map(|route| route.with_search_text(self.input.clone()));
        if let Some(updated) = updated {
            nav.update_current(updated);
        }
    }

    fn selected_result(&self) -> Option<&StudentIndexRecord> {
        self.results_state.selected().and_then(|position| self.results.get(position))
    }

    fn submit(
        &mut self,
        api: &dyn StudentApi,
        nav: &mut HistoryNavigator,
        status: &mut Option<String>,
    ) {
        let typed = self.input.trim();
        if typed.is_empty() {
            self.message = Some("Unesite broj indeksa ili ime.".to_owned());
            return;
        }

        if typed.chars().any(|c| c.is_ascii_digit()) {
            let canonical = canonical_index(typed);
            if canonical.is_empty() {
                self.message = Some("Unesite broj indeksa.".to_owned());
                return;
            }
            if !open_student(&canonical, api, nav, status) {
                self.message = Some(format!("Student sa indeksom {canonical} nije pronađen."));
            }
            return;
        }

        let (outcome, empty_message) = match self.mode {
            SearchMode::Name => {
                (api.search_students_by_name(typed), "Nema studenata za uneto ime.")
            }
            SearchMode::School => {
                (api.search_students_by_school(typed), "Nema studenata iz te škole.")
            }
        };
        match outcome {
            Ok(results) if results.is_empty() => {
                self.results.clear();
                self.results_state.select(None);
                self.message = Some(empty_message.to_owned());
            }
            Ok(results) => {
                self.results = results;
                self.results_state.select(Some(0));
                self.message = None;
            }
            Err(err) => *status = Some(format!("Pretraga nije uspela: {err}")),
        }
    }
}

/// Resolves a canonical index and navigates to the profile. Returns whether a
/// student was found; transport errors land in the status line.
fn open_student(
    canonical: &str,
    api: &dyn StudentApi,
    nav: &mut HistoryNavigator,
    status: &mut Option<String>,
) -> bool {
    match api.find_student(canonical) {
        Ok(Some((index, profile))) => {
            nav.navigate(Route::student_profile(index, profile, StudentTab::default()));
            true
        }
        Ok(None) => false,
        Err(err) => {
            *status = Some(format!("Pretraga nije uspela: {err}"));
            false
        }
    }
}

// ---- student profile ----

struct ProfileView {
    index: StudentIndexRecord,
    profile: StudentProfileRecord,
    tab: StudentTab,
    hydration: PanelHydration<StudentTab>,
    panels: HashMap<StudentTab, PanelData>,
}

impl ProfileView {
    fn new(index: StudentIndexRecord, profile: StudentProfileRecord) -> Self {
        Self {
            index,
            profile,
            tab: StudentTab::default(),
            hydration: PanelHydration::new(),
            panels: HashMap::new(),
        }
    }

    /// Rebinds the view to a different student. Every panel drops back to
    /// `NotLoaded`; fetches still in flight for the old binding become stale.
    fn set_data(&mut self, index: StudentIndexRecord, profile: StudentProfileRecord) {
        self.index = index;
        self.profile = profile;
        self.tab = StudentTab::default();
        self.hydration.rebind();
        self.panels.clear();
    }

    /// Selecting a tab is a navigable transition only when the user caused
    /// it; replays must not re-enter the navigator.
    fn select_tab(&mut self, tab: StudentTab, source: SelectionSource, nav: &mut HistoryNavigator) {
        self.tab = tab;
        if source == SelectionSource::User {
            nav.navigate(Route::student_profile(self.index.clone(), self.profile.clone(), tab));
        }
    }

    /// Idempotent: loads the selected tab only if it has never been hydrated
    /// under the current binding.
    fn ensure_selected_tab_loaded(&mut self, api: &dyn StudentApi) -> Result<(), ApiError> {
        let Some(ticket) = self.hydration.begin_load(self.tab) else {
            return Ok(());
        };
        match api.profile_panel(self.index.id, ticket.panel()) {
            Ok(data) => {
                if self.hydration.complete_load(ticket) {
                    self.panels.insert(ticket.panel(), data);
                }
                Ok(())
            }
            Err(err) => {
                self.hydration.abort_load(ticket);
                Err(err)
            }
        }
    }

    /// Enrolls or renews a school year for the bound student, then refetches
    /// the progress panel so the new row shows up.
    fn enroll_school_year(&mut self, renewed: bool, api: &dyn StudentApi) -> Result<(), ApiError> {
        api.enroll_school_year(self.index.id, renewed)?;
        self.hydration.invalidate(StudentTab::Progress);
        self.panels.remove(&StudentTab::Progress);
        self.ensure_selected_tab_loaded(api)
    }
}

// ---- list views ----

struct ExamPeriodsView {
    periods: Vec<ExamPeriodRecord>,
    state: ListState,
}

impl ExamPeriodsView {
    fn new(periods: Vec<ExamPeriodRecord>) -> Self {
        let mut state = ListState::default();
        if !periods.is_empty() {
            state.select(Some(0));
        }
        Self { periods, state }
    }

    fn selected(&self) -> Option<&ExamPeriodRecord> {
        self.state.selected().and_then(|position| self.periods.get(position))
    }
}

struct ExamsView {
    period: ExamPeriodRecord,
    exams: Vec<ExamRecord>,
    state: ListState,
}

impl ExamsView {
    fn new(period: ExamPeriodRecord, exams: Vec<ExamRecord>) -> Self {
        let mut state = ListState::default();
        if !exams.is_empty() {
            state.select(Some(0));
        }
        Self { period, exams, state }
    }
}

struct ProgramsView {
    programs: Vec<StudyProgramRecord>,
    state: ListState,
}

impl ProgramsView {
    fn new(programs: Vec<StudyProgramRecord>) -> Self {
        let mut state = ListState::default();
        if !programs.is_empty() {
            state.select(Some(0));
        }
        Self { programs, state }
    }

    fn selected(&self) -> Option<&StudyProgramRecord> {
        self.state.selected().and_then(|position| self.programs.get(position))
    }
}

struct ProgramDetailsView {
    program: StudyProgramRecord,
    subjects: Vec<SubjectRecord>,
    state: ListState,
}

impl ProgramDetailsView {
    fn new(program: StudyProgramRecord, subjects: Vec<SubjectRecord>) -> Self {
        let mut state = ListState::default();
        if !subjects.is_empty() {
            state.select(Some(0));
        }
        Self { program, subjects, state }
    }
}

// ---- drawing ----

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.size());
    let main_area = layout[0];
    let footer_area = layout[1];

    match &mut app.view {
        ActiveView::Search(view) => draw_search(frame, main_area, view),
        ActiveView::Profile(view) => draw_profile(frame, main_area, view),
        ActiveView::ExamPeriods(view) => draw_exam_periods(frame, main_area, view),
        ActiveView::ExamsByPeriod(view) => draw_exams(frame, main_area, view),
        ActiveView::StudyPrograms(view) => draw_programs(frame, main_area, view),
        ActiveView::ProgramDetails(view) => draw_program_details(frame, main_area, view),
    }

    frame.render_widget(
        Paragraph::new(footer_line(&app.view, &app.nav, app.status.as_deref())),
        footer_area,
    );
}

fn draw_search(frame: &mut Frame<'_>, area: Rect, view: &mut SearchView) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let title = match view.mode {
        SearchMode::Name => "Pretraga studenata (indeks ili ime)",
        SearchMode::School => "Pretraga studenata (srednja škola)",
    };
    let input = Paragraph::new(view.input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(FOCUS_COLOR)),
    );
    frame.render_widget(input, layout[0]);

    if let Some(message) = &view.message {
        frame.render_widget(
            Paragraph::new(message.as_str()).style(Style::default().fg(STATUS_COLOR)),
            layout[1],
        );
    }

    let items: Vec<ListItem<'_>> = view
        .results
        .iter()
        .map(|index| {
            ListItem::new(format!("{}  {}", index.display_label(), index.full_name()))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Rezultati"))
        .highlight_style(Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(list, layout[2], &mut view.results_state);
}

fn draw_profile(frame: &mut Frame<'_>, area: Rect, view: &ProfileView) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Profil: {}", view.index.full_name()),
            Style::default().fg(HEADER_COLOR).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Indeks: {}", view.index.display_label())),
        Line::from(format!("Ostvareno ESPB: {}", view.index.espb_earned)),
        Line::from(format!("Prosečna ocena: {}", view.index.average_label())),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    let selected = StudentTab::ALL.iter().position(|tab| *tab == view.tab).unwrap_or(0);
    let tabs = Tabs::new(StudentTab::ALL.iter().map(|tab| tab.title()).collect::<Vec<_>>())
        .select(selected)
        .highlight_style(Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, layout[1]);

    let body = Paragraph::new(panel_lines(view)).wrap(Wrap { trim: false });
    frame.render_widget(body, layout[2]);
}

fn panel_lines(view: &ProfileView) -> Vec<Line<'static>> {
    let Some(data) = view.panels.get(&view.tab) else {
        return vec![Line::from("Učitavanje…")];
    };

    match data {
        PanelData::Personal(profile) => vec![
            Line::from(format!("JMBG:    {}", profile.jmbg)),
            Line::from(format!("E-pošta: {}", profile.email)),
            Line::from(format!("Adresa:  {}", profile.address)),
            Line::from(format!("Telefon: {}", profile.phone)),
            Line::from(format!("Srednja škola: {}", profile.high_school)),
        ],
        PanelData::Unpassed(subjects) => {
            if subjects.is_empty() {
                vec![Line::from("Nema nepoloženih predmeta.")]
            } else {
                subjects
                    .iter()
                    .map(|subject| {
                        Line::from(format!(
                            "{}  {}  ({} ESPB, {}. semestar)",
                            subject.code, subject.name, subject.espb, subject.semester
                        ))
                    })
                    .collect()
            }
        }
        PanelData::Passed(exams) => exams
            .iter()
            .map(|exam| {
                Line::from(format!(
                    "{}  {}  ocena {}  ({} ESPB, {})",
                    exam.subject_code, exam.subject_name, exam.grade, exam.espb, exam.passed_on
                ))
            })
            .collect(),
        PanelData::Payments(payments) => payments
            .iter()
            .map(|payment| {
                Line::from(format!(
                    "{}  {}  {}",
                    payment.paid_on,
                    payment.amount_label(),
                    payment.purpose
                ))
            })
            .collect(),
        PanelData::Progress(enrollments) => enrollments
            .iter()
            .map(|enrollment| {
                let kind = if enrollment.renewed { "obnova" } else { "upis" };
                Line::from(format!(
                    "{}  {}. godina  ({kind})",
                    enrollment.school_year, enrollment.year_of_study
                ))
            })
            .collect(),
    }
}

fn draw_exam_periods(frame: &mut Frame<'_>, area: Rect, view: &mut ExamPeriodsView) {
    let items: Vec<ListItem<'_>> = view
        .periods
        .iter()
        .map(|period| {
            ListItem::new(format!(
                "{}  {}  ({} — {})",
                period.name, period.school_year, period.starts_on, period.ends_on
            ))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Ispitni rokovi"))
        .highlight_style(Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(list, area, &mut view.state);
}

fn draw_exams(frame: &mut Frame<'_>, area: Rect, view: &mut ExamsView) {
    let title = format!("Ispiti — {} {}", view.period.name, view.period.school_year);
    let block = Block::default().borders(Borders::ALL).title(title);
    if view.exams.is_empty() {
        frame.render_widget(Paragraph::new("Nema ispita u ovom roku.").block(block), area);
        return;
    }

    let items: Vec<ListItem<'_>> = view
        .exams
        .iter()
        .map(|exam| {
            ListItem::new(format!(
                "{}  {}  {}  ({} prijavljenih)",
                exam.exam_date, exam.subject_code, exam.subject_name, exam.registered
            ))
        })
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(list, area, &mut view.state);
}

fn draw_programs(frame: &mut Frame<'_>, area: Rect, view: &mut ProgramsView) {
    let items: Vec<ListItem<'_>> = view
        .programs
        .iter()
        .map(|program| {
            ListItem::new(format!(
                "{}  {}  ({} ESPB, {} godine)",
                program.code, program.name, program.espb_total, program.duration_years
            ))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Studijski programi"))
        .highlight_style(Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(list, area, &mut view.state);
}

fn draw_program_details(frame: &mut Frame<'_>, area: Rect, view: &mut ProgramDetailsView) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} — {}", view.program.code, view.program.name),
            Style::default().fg(HEADER_COLOR).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} ESPB, {} godine studija",
            view.program.espb_total, view.program.duration_years
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    let items: Vec<ListItem<'_>> = view
        .subjects
        .iter()
        .map(|subject| {
            ListItem::new(format!(
                "{}  {}  ({} ESPB, {}. semestar)",
                subject.code, subject.name, subject.espb, subject.semester
            ))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Predmeti"))
        .highlight_style(Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(list, layout[1], &mut view.state);
}

fn footer_line<'a>(
    view: &ActiveView,
    nav: &HistoryNavigator,
    status: Option<&'a str>,
) -> Line<'a> {
    if let Some(status) = status {
        return Line::from(Span::styled(status, Style::default().fg(STATUS_COLOR)));
    }

    let view_hint = match view {
        ActiveView::Search(_) => "Enter traži · Tab režim · ↑/↓ rezultati",
        ActiveView::Profile(view) if view.tab == StudentTab::Progress => {
            "1–5 kartice · u upis godine · o obnova"
        }
        ActiveView::Profile(_) => "1–5 kartice",
        ActiveView::ExamPeriods(_) => "↑/↓ izbor · Enter ispiti",
        ActiveView::ExamsByPeriod(_) => "↑/↓ lista · Esc rokovi",
        ActiveView::StudyPrograms(_) => "↑/↓ izbor · Enter detalji",
        ActiveView::ProgramDetails(_) => "↑/↓ predmeti · Esc programi",
    };

    let mut spans = vec![
        Span::styled("^[/^] ", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::styled(
            format!("nazad {} / napred {}  ", nav.back_len(), nav.forward_len()),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ),
        Span::styled("^S ", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::styled("pretraga  ", Style::default().fg(FOOTER_LABEL_COLOR)),
        Span::styled("^E ", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::styled("rokovi  ", Style::default().fg(FOOTER_LABEL_COLOR)),
        Span::styled("^P ", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::styled("programi  ", Style::default().fg(FOOTER_LABEL_COLOR)),
        Span::styled("^Q ", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::styled("izlaz  ", Style::default().fg(FOOTER_LABEL_COLOR)),
    ];
    spans.push(Span::styled(view_hint, Style::default().fg(FOOTER_LABEL_COLOR)));
    Line::from(spans)
}
