use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use engine::{Account, Calculator, Key, Money, Operator, validate};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui,
};

/// Maximum length of the bank amount input field.
const AMOUNT_INPUT_LIMIT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Bank,
    Calculator,
    Registration,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Self::Bank => "Bank",
            Self::Calculator => "Calculator",
            Self::Registration => "Registration",
        }
    }

    pub fn all() -> [Section; 3] {
        [Self::Bank, Self::Calculator, Self::Registration]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Name,
    Course,
    Phone,
    Address,
}

impl RegistrationField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Course => "Course",
            Self::Phone => "Phone (10 digits)",
            Self::Address => "Address",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Name => Self::Course,
            Self::Course => Self::Phone,
            Self::Phone => Self::Address,
            Self::Address => Self::Name,
        }
    }
}

#[derive(Debug)]
pub struct RegistrationState {
    pub name: String,
    pub course: String,
    pub phone: String,
    pub address: String,
    pub focus: RegistrationField,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self {
            name: String::new(),
            course: String::new(),
            phone: String::new(),
            address: String::new(),
            focus: RegistrationField::Name,
        }
    }
}

impl RegistrationState {
    fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            RegistrationField::Name => &mut self.name,
            RegistrationField::Course => &mut self.course,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::Address => &mut self.address,
        }
    }

    fn clear(&mut self) {
        self.name.clear();
        self.course.clear();
        self.phone.clear();
        self.address.clear();
        self.focus = RegistrationField::Name;
    }
}

#[derive(Debug)]
pub struct BankState {
    pub account: Account,
    pub amount_input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Debug)]
pub struct AppState {
    pub section: Section,
    pub bank: BankState,
    pub calculator: Calculator,
    pub registration: RegistrationState,
    pub toast: Option<ToastState>,
}

pub struct App {
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let initial: Money = config.initial_balance.parse()?;
        let account = Account::new(config.holder, config.account_number, initial);
        tracing::info!(
            account = %account.masked_number(),
            balance = %account.balance(),
            "starting"
        );

        let state = AppState {
            section: Section::Bank,
            bank: BankState {
                account,
                amount_input: String::new(),
            },
            calculator: Calculator::new(),
            registration: RegistrationState::default(),
            toast: None,
        };

        Ok(Self {
            state,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        // The session restores the screen on drop, error paths included.
        let mut terminal = ui::TerminalSession::start()?;
        self.event_loop(&mut terminal)
    }

    fn event_loop(&mut self, terminal: &mut ui::TerminalSession) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Messages live until the next key press.
        self.state.toast = None;

        match ui::keymap::map_key(key) {
            ui::keymap::AppAction::Quit => {
                self.should_quit = true;
            }
            ui::keymap::AppAction::Section(section) => {
                self.state.section = section;
            }
            action => match self.state.section {
                Section::Bank => self.handle_bank(action),
                Section::Calculator => self.handle_calculator(action),
                Section::Registration => self.handle_registration(action),
            },
        }
    }

    fn handle_bank(&mut self, action: ui::keymap::AppAction) {
        match action {
            ui::keymap::AppAction::Input(ch) => match ch {
                '0'..='9' | '.' | ',' => {
                    if self.state.bank.amount_input.len() < AMOUNT_INPUT_LIMIT {
                        self.state.bank.amount_input.push(ch);
                    }
                }
                'd' | 'D' => self.transact(Transaction::Deposit),
                'w' | 'W' => self.transact(Transaction::Withdraw),
                'c' | 'C' => self.state.bank.amount_input.clear(),
                _ => {}
            },
            ui::keymap::AppAction::Backspace => {
                self.state.bank.amount_input.pop();
            }
            ui::keymap::AppAction::Cancel => self.state.bank.amount_input.clear(),
            _ => {}
        }
    }

    fn transact(&mut self, kind: Transaction) {
        let raw = self.state.bank.amount_input.trim().to_string();
        self.state.bank.amount_input.clear();

        if raw.is_empty() || raw == "0.00" || raw == "0" {
            self.toast(ToastLevel::Error, "Please enter a valid amount.");
            return;
        }

        let amount: Money = match raw.parse() {
            Ok(amount) => amount,
            Err(_) => {
                self.toast(ToastLevel::Error, "Invalid number format for amount.");
                return;
            }
        };

        let account = &mut self.state.bank.account;
        let (success, message) = match kind {
            Transaction::Deposit => {
                let success = account.deposit(amount);
                let message = if success {
                    "Deposit successful!".to_string()
                } else {
                    "Invalid deposit amount.".to_string()
                };
                (success, message)
            }
            Transaction::Withdraw => {
                let success = account.withdraw(amount);
                // The ledger reports one boolean for both failure causes;
                // re-check the balance to pick the message.
                let message = if success {
                    "Withdrawal successful!".to_string()
                } else if amount.is_positive() && amount > account.balance() {
                    "Withdrawal failed: Insufficient funds.".to_string()
                } else {
                    "Invalid withdrawal amount.".to_string()
                };
                (success, message)
            }
        };

        tracing::debug!(%amount, success, kind = kind.as_str(), "transaction");
        let level = if success {
            ToastLevel::Success
        } else {
            ToastLevel::Error
        };
        self.toast(level, message);
    }

    fn handle_calculator(&mut self, action: ui::keymap::AppAction) {
        match action {
            ui::keymap::AppAction::Input(ch) => {
                if let Some(key) = calculator_key(ch) {
                    self.state.calculator.press(key);
                }
            }
            ui::keymap::AppAction::Submit => self.state.calculator.press(Key::Equals),
            ui::keymap::AppAction::Cancel => self.state.calculator.press(Key::Clear),
            _ => {}
        }
    }

    fn handle_registration(&mut self, action: ui::keymap::AppAction) {
        match action {
            ui::keymap::AppAction::NextField => {
                self.state.registration.focus = self.state.registration.focus.next();
            }
            ui::keymap::AppAction::Input(ch) => {
                self.state.registration.active_field_mut().push(ch);
            }
            ui::keymap::AppAction::Backspace => {
                self.state.registration.active_field_mut().pop();
            }
            ui::keymap::AppAction::Cancel => self.state.registration.clear(),
            ui::keymap::AppAction::Submit => {
                let form = &self.state.registration;
                match validate(&form.name, &form.course, &form.phone) {
                    Ok(registration) => {
                        tracing::debug!(name = %registration.name, "registered");
                        self.toast(
                            ToastLevel::Success,
                            format!(
                                "Successfully Registered: {} ({})",
                                registration.name, registration.course
                            ),
                        );
                        self.state.registration.clear();
                    }
                    Err(err) => self.toast(ToastLevel::Error, err.to_string()),
                }
            }
            _ => {}
        }
    }

    fn toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.state.toast = Some(ToastState {
            message: message.into(),
            level,
        });
    }
}

#[derive(Debug, Clone, Copy)]
enum Transaction {
    Deposit,
    Withdraw,
}

impl Transaction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }
}

/// Maps a typed character onto the calculator's input alphabet.
fn calculator_key(ch: char) -> Option<Key> {
    match ch {
        '0'..='9' => Some(Key::Digit(ch as u8 - b'0')),
        '.' | ',' => Some(Key::Decimal),
        '+' => Some(Key::Operator(Operator::Add)),
        '-' => Some(Key::Operator(Operator::Subtract)),
        '*' | 'x' | 'X' | '×' => Some(Key::Operator(Operator::Multiply)),
        '/' | '÷' => Some(Key::Operator(Operator::Divide)),
        '=' => Some(Key::Equals),
        '%' => Some(Key::Percent),
        'n' | 'N' => Some(Key::SignChange),
        'c' | 'C' | 'a' | 'A' => Some(Key::Clear),
        _ => None,
    }
}
