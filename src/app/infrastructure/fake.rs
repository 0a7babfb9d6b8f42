//! In-memory appearance store for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::error::CommandError;
use super::store::AppearanceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Get,
    Set(u32),
    Broadcast,
}

#[derive(Debug, Default)]
struct FakeState {
    flag: Option<u32>,
    raw_output: Option<String>,
    fail_get: bool,
    fail_set: bool,
    fail_broadcast: bool,
    calls: Vec<Call>,
}

#[derive(Debug, Default)]
pub struct FakeStore {
    state: Mutex<FakeState>,
    // Outside the mutex so a panic does not poison it
    panic_on_set: AtomicBool,
}

fn denied(program: &str) -> CommandError {
    CommandError::Status {
        program: program.to_string(),
        code: Some(1),
        stderr: "ERROR: Access is denied.".to_string(),
    }
}

impl FakeStore {
    pub fn with_flag(flag: u32) -> Self {
        let store = Self::default();
        store.state.lock().unwrap().flag = Some(flag);
        store
    }

    /// Replace the query output with arbitrary text
    pub fn with_output(output: &str) -> Self {
        let store = Self::default();
        store.state.lock().unwrap().raw_output = Some(output.to_string());
        store
    }

    pub fn failing_get(self) -> Self {
        self.state.lock().unwrap().fail_get = true;
        self
    }

    pub fn failing_set(self) -> Self {
        self.state.lock().unwrap().fail_set = true;
        self
    }

    pub fn failing_broadcast(self) -> Self {
        self.state.lock().unwrap().fail_broadcast = true;
        self
    }

    pub fn panicking_set(self) -> Self {
        self.panic_on_set.store(true, Ordering::SeqCst);
        self
    }

    /// The stored flag, bypassing the query path
    pub fn raw_flag(&self) -> Option<u32> {
        self.state.lock().unwrap().flag
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }
}

impl AppearanceStore for FakeStore {
    fn get(&self) -> Result<String, CommandError> {
        let mut st = self.state.lock().unwrap();
        st.calls.push(Call::Get);
        if st.fail_get {
            return Err(denied("reg"));
        }
        if let Some(raw) = &st.raw_output {
            return Ok(raw.clone());
        }
        match st.flag {
            Some(flag) => Ok(format!(
                "\r\nHKEY_CURRENT_USER\\Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize\r\n    AppsUseLightTheme    REG_DWORD    0x{:x}\r\n\r\n",
                flag
            )),
            None => Err(CommandError::Status {
                program: "reg".to_string(),
                code: Some(1),
                stderr: "ERROR: The system was unable to find the specified registry key or value.".to_string(),
            }),
        }
    }

    fn set(&self, value: u32) -> Result<(), CommandError> {
        if self.panic_on_set.load(Ordering::SeqCst) {
            panic!("registry backend crashed");
        }
        let mut st = self.state.lock().unwrap();
        st.calls.push(Call::Set(value));
        if st.fail_set {
            return Err(denied("reg"));
        }
        st.flag = Some(value);
        st.raw_output = None;
        Ok(())
    }

    fn broadcast(&self) -> Result<(), CommandError> {
        let mut st = self.state.lock().unwrap();
        st.calls.push(Call::Broadcast);
        if st.fail_broadcast {
            return Err(denied("rundll32.exe"));
        }
        Ok(())
    }
}
