//! Main TUI application state and logic
//!
//! [`App`] owns the [`Store`] and the page state machine. One key event is
//! routed to the active page, which may parse form input, call into a ledger,
//! and record the outcome on the status line; the loop then re-renders.
//!
//! Focus within a page walks a fixed ring of slots (text fields and at most
//! one selectable list), so Tab order is data, not control flow.

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::calc;
use crate::store::inventory::Product;
use crate::store::{Store, StoreError};
use crate::ui::form::{parse_date, parse_f64, parse_u32, Form, TextField};
use crate::ui::pages::auth::FRONT_ACTIONS;
use crate::ui::pages::{self, fmt_rupees, HOME_ACTIONS};

/// The pages of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Front,
    Login,
    Register,
    Home,
    Search,
    Manage,
    Due,
    ViewDue,
    /// One customer's due list, by customer name
    Customer(String),
    Calculator,
    Profile,
}

impl Page {
    /// Where Esc leads. Front and Home are their own back targets.
    pub fn back(&self) -> Page {
        match self {
            Page::Front => Page::Front,
            Page::Login | Page::Register => Page::Front,
            Page::Home => Page::Home,
            Page::Search
            | Page::Manage
            | Page::Due
            | Page::ViewDue
            | Page::Calculator
            | Page::Profile => Page::Home,
            Page::Customer(_) => Page::ViewDue,
        }
    }

    /// Pages behind the login flag.
    pub fn requires_login(&self) -> bool {
        !matches!(self, Page::Front | Page::Login | Page::Register)
    }
}

/// One focusable position within a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A text field, by index into the page's form
    Field(usize),
    /// The page's selectable list
    List,
}

/// Focus ring of the given page, in Tab order.
fn slot_ring(page: &Page) -> Vec<Slot> {
    match page {
        Page::Front | Page::Home | Page::Customer(_) => vec![Slot::List],
        Page::Login | Page::Register => vec![Slot::Field(0), Slot::Field(1)],
        Page::Search | Page::Calculator => vec![Slot::Field(0)],
        Page::Manage => vec![
            Slot::Field(0),
            Slot::Field(1),
            Slot::Field(2),
            Slot::List,
            Slot::Field(3),
        ],
        Page::Due => vec![
            Slot::Field(0),
            Slot::Field(1),
            Slot::List,
            Slot::Field(2),
            Slot::Field(3),
        ],
        Page::ViewDue => vec![Slot::Field(0), Slot::List],
        Page::Profile => vec![Slot::Field(0), Slot::Field(1)],
    }
}

/// Outcome coloring of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// The message shown at the bottom of the screen
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub message: String,
    pub kind: StatusKind,
}

/// The main application state
pub struct App {
    /// All ledgers and the store title
    pub store: Store,

    /// The active page
    pub page: Page,

    /// Email of the authenticated operator, if any
    pub session: Option<String>,

    /// Editable fields of the active page
    pub form: Form,

    /// Position in the page's focus ring
    pub slot_index: usize,

    /// Selected row of the page's list, where it has one
    pub list_index: usize,

    /// Last calculator result, already formatted
    pub calc_result: Option<String>,

    /// Outcome of the last operation
    pub status: StatusLine,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app over the given store, starting on the front page.
    pub fn new(store: Store) -> Self {
        App {
            store,
            page: Page::Front,
            session: None,
            form: Form::empty(),
            slot_index: 0,
            list_index: 0,
            calc_result: None,
            status: StatusLine {
                message: String::from("Welcome!"),
                kind: StatusKind::Info,
            },
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());
        let body = chunks[0];

        let focused_field = match self.current_slot() {
            Slot::Field(i) => Some(i),
            Slot::List => None,
        };
        let list_focused = self.current_slot() == Slot::List;

        match &self.page {
            Page::Front => pages::render_front_page(
                frame,
                body,
                self.list_index.min(FRONT_ACTIONS.len() - 1),
            ),
            Page::Login => pages::render_login_page(frame, body, &self.form, focused_field),
            Page::Register => pages::render_register_page(frame, body, &self.form, focused_field),
            Page::Home => pages::render_home_page(
                frame,
                body,
                &self.store.title,
                self.session.as_deref().unwrap_or("-"),
                self.list_index.min(HOME_ACTIONS.len() - 1),
            ),
            Page::Search => {
                let matches = self.store.inventory.search(self.form.value(0));
                pages::render_search_page(frame, body, &self.form, focused_field, &matches);
            }
            Page::Manage => {
                let products: Vec<&Product> = self.store.inventory.products().iter().collect();
                pages::render_manage_page(
                    frame,
                    body,
                    &self.form,
                    focused_field,
                    &products,
                    self.list_index,
                    list_focused,
                );
            }
            Page::Due => {
                let products: Vec<&Product> = self.store.inventory.products().iter().collect();
                pages::render_due_page(
                    frame,
                    body,
                    &self.form,
                    focused_field,
                    &products,
                    self.list_index,
                    list_focused,
                );
            }
            Page::ViewDue => {
                let matches = self.store.customers.search(self.form.value(0));
                let summary = self.store.customers.summary();
                pages::render_view_due_page(
                    frame,
                    body,
                    &self.form,
                    focused_field,
                    &matches,
                    self.list_index,
                    list_focused,
                    &summary,
                );
            }
            Page::Customer(name) => pages::render_customer_page(
                frame,
                body,
                self.store.customers.get(name),
                self.list_index,
            ),
            Page::Calculator => pages::render_calculator_page(
                frame,
                body,
                &self.form,
                focused_field,
                self.calc_result.as_deref(),
            ),
            Page::Profile => pages::render_profile_page(
                frame,
                body,
                &self.form,
                focused_field,
                self.session.as_deref().unwrap_or("-"),
            ),
        }

        pages::render_status_bar(frame, chunks[1], &self.status, &self.page);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab => self.cycle_slot(1),
            KeyCode::BackTab => self.cycle_slot(-1),
            KeyCode::Up => self.move_vertical(-1),
            KeyCode::Down => self.move_vertical(1),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                if let Slot::Field(i) = self.current_slot() {
                    self.form.fields[i].pop();
                }
            }
            KeyCode::Char(c) => self.handle_char(c),
            _ => {}
        }
    }

    fn handle_char(&mut self, c: char) {
        if let Slot::Field(i) = self.current_slot() {
            self.form.fields[i].push(c);
            return;
        }
        // pages whose focus is a list have no text input; plain keys act
        match c {
            'q' if matches!(self.page, Page::Front | Page::Home) => self.should_quit = true,
            'd' if matches!(self.page, Page::Customer(_)) => self.remove_selected_due(),
            'c' if matches!(self.page, Page::Customer(_)) => self.clear_current_customer(),
            _ => {}
        }
    }

    /// Switch pages, rebuilding the page's form and resetting focus.
    ///
    /// Protected pages bounce back to the front page without a session.
    pub fn set_page(&mut self, page: Page) {
        if page.requires_login() && self.session.is_none() {
            self.error(StoreError::NotLoggedIn.to_string());
            self.page = Page::Front;
            self.form = Form::empty();
            self.slot_index = 0;
            self.list_index = 0;
            self.calc_result = None;
            return;
        }
        self.form = build_form(&page, &self.store);
        self.slot_index = 0;
        self.list_index = 0;
        self.calc_result = None;
        self.page = page;
    }

    fn go_back(&mut self) {
        if self.page == Page::Front {
            self.should_quit = true;
            return;
        }
        let target = self.page.back();
        if target != self.page {
            self.set_page(target);
        }
    }

    fn current_slot(&self) -> Slot {
        let ring = slot_ring(&self.page);
        ring[self.slot_index % ring.len()]
    }

    fn cycle_slot(&mut self, delta: i32) {
        let len = slot_ring(&self.page).len();
        self.slot_index = if delta >= 0 {
            (self.slot_index + 1) % len
        } else {
            (self.slot_index + len - 1) % len
        };
    }

    fn move_vertical(&mut self, delta: i32) {
        match self.current_slot() {
            Slot::List => {
                let len = self.list_len();
                if delta < 0 {
                    self.list_index = self.list_index.saturating_sub(1);
                } else if len > 0 {
                    self.list_index = (self.list_index + 1).min(len - 1);
                }
            }
            Slot::Field(_) => self.cycle_slot(delta),
        }
    }

    /// Length of the active page's list.
    fn list_len(&self) -> usize {
        match &self.page {
            Page::Front => FRONT_ACTIONS.len(),
            Page::Home => HOME_ACTIONS.len(),
            Page::Manage | Page::Due => self.store.inventory.products().len(),
            Page::ViewDue => self.store.customers.search(self.form.value(0)).len(),
            Page::Customer(name) => self
                .store
                .customers
                .get(name)
                .map_or(0, |c| c.dues.len()),
            _ => 0,
        }
    }

    fn submit(&mut self) {
        match self.page.clone() {
            Page::Front => {
                let choice = self.list_index.min(FRONT_ACTIONS.len() - 1);
                self.set_page(if choice == 0 { Page::Login } else { Page::Register });
            }
            Page::Login => self.submit_login(),
            Page::Register => self.submit_register(),
            Page::Home => {
                let target = match self.list_index.min(HOME_ACTIONS.len() - 1) {
                    0 => Page::Search,
                    1 => Page::Due,
                    2 => Page::Manage,
                    3 => Page::ViewDue,
                    4 => Page::Calculator,
                    _ => Page::Profile,
                };
                self.set_page(target);
            }
            Page::Search => {}
            Page::Manage => match self.current_slot() {
                Slot::Field(0..=2) => self.submit_add_product(),
                _ => self.submit_sell(),
            },
            Page::Due => self.submit_add_due(),
            Page::ViewDue => self.open_selected_customer(),
            Page::Customer(_) => {}
            Page::Calculator => self.submit_calculator(),
            Page::Profile => self.submit_profile(),
        }
    }

    // ===== Page submit handlers =====

    fn submit_login(&mut self) {
        let email = self.form.value(0).trim().to_string();
        let password = self.form.value(1).to_string();
        match self.store.accounts.authenticate(&email, &password) {
            Ok(()) => {
                self.session = Some(email);
                self.set_page(Page::Home);
                self.success("Logged in");
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    fn submit_register(&mut self) {
        let email = self.form.value(0).trim().to_string();
        let password = self.form.value(1).to_string();
        match self.store.accounts.register(&email, &password) {
            Ok(()) => {
                self.session = Some(email);
                self.set_page(Page::Home);
                self.success("Registered successfully");
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    fn submit_add_product(&mut self) {
        let name = self.form.value(0).to_string();
        let stock = match parse_u32("Stock", self.form.value(1)) {
            Ok(v) => v,
            Err(e) => return self.error(e.to_string()),
        };
        let rate = match parse_f64("Rate", self.form.value(2)) {
            Ok(v) => v,
            Err(e) => return self.error(e.to_string()),
        };
        match self.store.inventory.add(&name, stock, rate) {
            Ok(()) => {
                self.success(format!("Added '{}'", name.trim()));
                self.form.clear_field(0);
                self.form.clear_field(1);
                self.form.clear_field(2);
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    fn submit_sell(&mut self) {
        let products = self.store.inventory.products();
        if products.is_empty() {
            return self.error("No products to sell".to_string());
        }
        let name = products[self.list_index.min(products.len() - 1)].name.clone();
        let quantity = match parse_u32("Quantity", self.form.value(3)) {
            Ok(v) => v,
            Err(e) => return self.error(e.to_string()),
        };
        match self.store.inventory.sell(&name, quantity) {
            Ok(remaining) => {
                self.success(format!(
                    "Sold {} x {} (stock left: {})",
                    quantity, name, remaining
                ));
                self.form.clear_field(3);
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    fn submit_add_due(&mut self) {
        let customer = self.form.value(0).to_string();
        let phone = self.form.value(1).to_string();
        let quantity = match parse_u32("Quantity", self.form.value(2)) {
            Ok(v) => v,
            Err(e) => return self.error(e.to_string()),
        };
        let date = match parse_date(self.form.value(3)) {
            Ok(v) => v,
            Err(e) => return self.error(e.to_string()),
        };
        let products = self.store.inventory.products();
        if products.is_empty() {
            return self.error("No products in inventory".to_string());
        }
        let product_name = products[self.list_index.min(products.len() - 1)].name.clone();
        // rate is captured now; later price changes must not touch this entry
        let rate = match self.store.inventory.find_by_name(&product_name) {
            Some(p) => p.rate,
            None => {
                return self.error(
                    StoreError::UnknownProduct { name: product_name }.to_string(),
                )
            }
        };
        match self
            .store
            .customers
            .add_due(&customer, &phone, &product_name, quantity, rate, date)
        {
            Ok(()) => {
                let name = customer.trim().to_string();
                self.set_page(Page::Customer(name.clone()));
                self.success(format!("Due added for {}", name));
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    fn open_selected_customer(&mut self) {
        let matches = self.store.customers.search(self.form.value(0));
        if matches.is_empty() {
            return self.info("No customer selected");
        }
        let name = matches[self.list_index.min(matches.len() - 1)].name.clone();
        self.set_page(Page::Customer(name));
    }

    fn remove_selected_due(&mut self) {
        let Page::Customer(name) = &self.page else {
            return;
        };
        let name = name.clone();
        match self.store.customers.remove_entry(&name, self.list_index) {
            Ok(entry) => {
                self.success(format!(
                    "Removed {} ({})",
                    entry.product,
                    fmt_rupees(entry.subtotal())
                ));
                let len = self.store.customers.get(&name).map_or(0, |c| c.dues.len());
                self.list_index = self.list_index.min(len.saturating_sub(1));
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    fn clear_current_customer(&mut self) {
        let Page::Customer(name) = &self.page else {
            return;
        };
        let name = name.clone();
        match self.store.customers.clear(&name) {
            Ok(customer) => {
                self.set_page(Page::ViewDue);
                self.success(format!("Cleared all dues for {}", customer.name));
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    fn submit_calculator(&mut self) {
        let input = self.form.value(0).trim().to_string();
        if input.is_empty() {
            return self.info("Enter an expression");
        }
        match calc::evaluate(&input) {
            Ok(value) => {
                self.calc_result = Some(format_number(value));
                self.success("Evaluated");
            }
            Err(e) => {
                self.calc_result = None;
                self.error(e.to_string());
            }
        }
    }

    fn submit_profile(&mut self) {
        match self.current_slot() {
            Slot::Field(0) => {
                let title = self.form.value(0).trim().to_string();
                if title.is_empty() {
                    return self.error(
                        StoreError::EmptyField {
                            field: "Store title",
                        }
                        .to_string(),
                    );
                }
                self.store.title = title;
                self.success("Title updated");
            }
            Slot::Field(1) => {
                let Some(email) = self.session.clone() else {
                    return self.error(StoreError::NotLoggedIn.to_string());
                };
                let new_password = self.form.value(1).to_string();
                match self.store.accounts.change_password(&email, &new_password) {
                    Ok(()) => {
                        self.success("Password updated");
                        self.form.clear_field(1);
                    }
                    Err(e) => self.error(e.to_string()),
                }
            }
            _ => {}
        }
    }

    // ===== Status line =====

    fn info(&mut self, message: impl Into<String>) {
        self.status = StatusLine {
            message: message.into(),
            kind: StatusKind::Info,
        };
    }

    fn success(&mut self, message: impl Into<String>) {
        self.status = StatusLine {
            message: message.into(),
            kind: StatusKind::Success,
        };
    }

    fn error(&mut self, message: String) {
        self.status = StatusLine {
            message,
            kind: StatusKind::Error,
        };
    }
}

/// Build the editable fields a page starts with.
fn build_form(page: &Page, store: &Store) -> Form {
    match page {
        Page::Login | Page::Register => Form::new(vec![
            TextField::new("Email"),
            TextField::masked("Password"),
        ]),
        Page::Search => Form::new(vec![TextField::new("Product name")]),
        Page::Manage => Form::new(vec![
            TextField::new("Name"),
            TextField::new("Stock"),
            TextField::new("Rate"),
            TextField::new("Quantity"),
        ]),
        Page::Due => Form::new(vec![
            TextField::new("Customer"),
            TextField::new("Phone"),
            TextField::new("Quantity"),
            TextField::with_value(
                "Date",
                Local::now().date_naive().format("%Y-%m-%d").to_string(),
            ),
        ]),
        Page::ViewDue => Form::new(vec![TextField::new("Customer name")]),
        Page::Calculator => Form::new(vec![TextField::new("Expression")]),
        Page::Profile => Form::new(vec![
            TextField::with_value("Store title", store.title.clone()),
            TextField::masked("New password"),
        ]),
        Page::Front | Page::Home | Page::Customer(_) => Form::empty(),
    }
}

/// Calculator result formatting: whole results without a trailing ".0".
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in_app() -> App {
        let mut app = App::new(Store::seeded());
        app.session = Some("a@b.com".to_string());
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_back_targets() {
        assert_eq!(Page::Login.back(), Page::Front);
        assert_eq!(Page::Register.back(), Page::Front);
        assert_eq!(Page::Search.back(), Page::Home);
        assert_eq!(Page::Manage.back(), Page::Home);
        assert_eq!(Page::Due.back(), Page::Home);
        assert_eq!(Page::ViewDue.back(), Page::Home);
        assert_eq!(Page::Calculator.back(), Page::Home);
        assert_eq!(Page::Profile.back(), Page::Home);
        assert_eq!(Page::Customer("Amit".into()).back(), Page::ViewDue);
    }

    #[test]
    fn test_protected_pages() {
        assert!(!Page::Front.requires_login());
        assert!(!Page::Login.requires_login());
        assert!(!Page::Register.requires_login());
        assert!(Page::Home.requires_login());
        assert!(Page::Customer("x".into()).requires_login());
    }

    #[test]
    fn test_unauthenticated_jump_bounces_to_front() {
        let mut app = App::new(Store::seeded());
        app.set_page(Page::Manage);
        assert_eq!(app.page, Page::Front);
        assert_eq!(app.status.kind, StatusKind::Error);
    }

    #[test]
    fn test_slot_rings_match_forms() {
        let store = Store::seeded();
        let all_pages = [
            Page::Front,
            Page::Login,
            Page::Register,
            Page::Home,
            Page::Search,
            Page::Manage,
            Page::Due,
            Page::ViewDue,
            Page::Customer("x".into()),
            Page::Calculator,
            Page::Profile,
        ];
        for page in &all_pages {
            let ring = slot_ring(page);
            assert!(!ring.is_empty(), "empty ring for {:?}", page);
            let form = build_form(page, &store);
            for slot in ring {
                if let Slot::Field(i) = slot {
                    assert!(
                        i < form.fields.len(),
                        "slot {:?} has no field on {:?}",
                        slot,
                        page
                    );
                }
            }
        }
    }

    #[test]
    fn test_register_flow_logs_in() {
        let mut app = App::new(Store::seeded());
        app.set_page(Page::Register);
        app.form.fields[0].value = "a@b.com".to_string();
        app.form.fields[1].value = "12345678".to_string();
        app.submit();
        assert_eq!(app.page, Page::Home);
        assert_eq!(app.session.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_register_rejects_short_password() {
        let mut app = App::new(Store::seeded());
        app.set_page(Page::Register);
        app.form.fields[0].value = "a@b.com".to_string();
        app.form.fields[1].value = "123".to_string();
        app.submit();
        assert_eq!(app.page, Page::Register);
        assert!(app.session.is_none());
        assert_eq!(app.status.kind, StatusKind::Error);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut app = App::new(Store::seeded());
        app.set_page(Page::Login);
        app.handle_key_event(key(KeyCode::Char('a')));
        app.handle_key_event(key(KeyCode::Char('b')));
        app.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(app.form.value(0), "a");

        app.handle_key_event(key(KeyCode::Tab));
        app.handle_key_event(key(KeyCode::Char('x')));
        assert_eq!(app.form.value(1), "x");
    }

    #[test]
    fn test_sell_from_manage_page() {
        let mut app = logged_in_app();
        app.set_page(Page::Manage);
        // focus the quantity field: Name, Stock, Rate, List, Quantity
        for _ in 0..4 {
            app.handle_key_event(key(KeyCode::Tab));
        }
        // list_index stays on the first product (Glass Bottle)
        app.form.fields[3].value = "30".to_string();
        app.submit();
        assert_eq!(app.status.kind, StatusKind::Success);
        assert_eq!(
            app.store.inventory.find_by_name("Glass Bottle").unwrap().stock,
            70
        );
    }

    #[test]
    fn test_add_due_jumps_to_customer_page() {
        let mut app = logged_in_app();
        app.set_page(Page::Due);
        app.form.fields[0].value = "Amit".to_string();
        app.form.fields[1].value = "9999999999".to_string();
        app.form.fields[2].value = "5".to_string();
        app.form.fields[3].value = "2024-01-01".to_string();
        app.submit();
        assert_eq!(app.page, Page::Customer("Amit".to_string()));
        assert_eq!(app.store.customers.total_for("Amit"), Ok(100.0));
    }

    #[test]
    fn test_remove_due_on_empty_customer_reports_error() {
        let mut app = logged_in_app();
        app.store
            .customers
            .add_due(
                "Amit",
                "9",
                "Glass Bottle",
                1,
                20.0,
                chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            )
            .unwrap();
        app.set_page(Page::Customer("Amit".to_string()));
        app.remove_selected_due();
        assert_eq!(app.status.kind, StatusKind::Success);
        // second removal: list is empty now, surfaced as an error
        app.remove_selected_due();
        assert_eq!(app.status.kind, StatusKind::Error);
    }

    #[test]
    fn test_calculator_result_and_error() {
        let mut app = logged_in_app();
        app.set_page(Page::Calculator);
        app.form.fields[0].value = "2+3*4".to_string();
        app.submit();
        assert_eq!(app.calc_result.as_deref(), Some("14"));

        app.form.fields[0].value = "2+x".to_string();
        app.submit();
        assert!(app.calc_result.is_none());
        assert_eq!(app.status.kind, StatusKind::Error);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
    }
}
