//! Main application window
//!
//! Shows the welcome banner and the two feature buttons, and owns the
//! thread's message loop. Closing it ends the loop and the application.

#![allow(unsafe_op_in_unsafe_fn)]

use std::ffi::c_void;

use crate::app::{AppController, QueryOutcome};
use crate::platform::dialogs::{show_error, show_info};
use crate::platform::windows::{
    command_id, create_bold_font, create_child, default_gui_font, module_instance,
    register_window_class, to_wstring, PlatformError,
};
use crate::ui::calculator::CalculatorWindow;
use crate::ui::layout::{ControlRect, MainLayout};
use crate::ui::UiError;
use tracing::{error, info};
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{DeleteObject, HFONT};
use windows::Win32::UI::WindowsAndMessaging::*;

const CLASS_NAME: PCWSTR = w!("TutorMainWindow");

const ID_BTN_LEARN_AREA: i32 = 201;
const ID_BTN_QUERY_ONTOLOGY: i32 = 202;
// Matches the Win32 SS_CENTER static control style.
const SS_CENTER_BITS: u32 = 0x0001;

const WELCOME_TEXT: &str = "Welcome to Area Calculation Learning System";
const WELCOME_FONT_HEIGHT: i32 = 16;
const RESULTS_TITLE: &str = "Ontology Query Results";
const ERROR_TITLE: &str = "Error";

/// Public entry point for the application window
pub struct MainWindow;

impl MainWindow {
    /// Creates the window and pumps messages until it is closed
    pub fn run(controller: AppController) -> Result<(), UiError> {
        let instance = module_instance()?;
        register_window_class(instance, CLASS_NAME, main_wnd_proc)?;

        let title = to_wstring(&controller.config().main_title);
        let size = controller.config().main_window;
        let state_ptr = Box::into_raw(Box::new(MainWindowState::new(controller)));

        let hwnd = unsafe {
            CreateWindowExW(
                WS_EX_CONTROLPARENT,
                CLASS_NAME,
                PCWSTR(title.as_ptr()),
                WS_OVERLAPPEDWINDOW,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                size.width,
                size.height,
                None,
                None,
                instance,
                Some(state_ptr as *const c_void),
            )
        };

        if hwnd.0 == 0 {
            let _ = unsafe { Box::from_raw(state_ptr) };
            return Err(UiError::WindowCreationFailed("main"));
        }

        unsafe {
            ShowWindow(hwnd, SW_SHOW);
            let _ = UpdateWindow(hwnd);
        }
        info!("Main window ready");

        let result = run_message_loop();
        let state = unsafe { Box::from_raw(state_ptr) };
        state.release_fonts();
        result
    }
}

struct MainWindowState {
    hwnd: HWND,
    controller: AppController,
    controls: Option<MainControls>,
    font: HFONT,
    title_font: HFONT,
}

#[derive(Debug, Clone, Copy)]
struct MainControls {
    welcome: HWND,
    area_button: HWND,
    query_button: HWND,
}

impl MainWindowState {
    fn new(controller: AppController) -> Self {
        Self {
            hwnd: HWND(0),
            controller,
            controls: None,
            font: default_gui_font(),
            title_font: create_bold_font(WELCOME_FONT_HEIGHT),
        }
    }

    fn build_controls(&mut self) -> Result<(), PlatformError> {
        let zero = (0, 0, 0, 0);
        let plain = WINDOW_EX_STYLE(0);
        let button_style = WS_TABSTOP.0 | (BS_PUSHBUTTON as u32);

        let controls = MainControls {
            welcome: create_child(
                self.hwnd,
                w!("STATIC"),
                WELCOME_TEXT,
                SS_CENTER_BITS,
                plain,
                0,
                zero,
                self.title_font,
            )?,
            area_button: create_child(
                self.hwnd,
                w!("BUTTON"),
                "Learn Area of Shapes",
                button_style,
                plain,
                ID_BTN_LEARN_AREA,
                zero,
                self.font,
            )?,
            query_button: create_child(
                self.hwnd,
                w!("BUTTON"),
                "Query Ontology",
                button_style,
                plain,
                ID_BTN_QUERY_ONTOLOGY,
                zero,
                self.font,
            )?,
        };

        self.controls = Some(controls);
        self.layout();
        Ok(())
    }

    fn layout(&self) {
        let Some(controls) = self.controls else {
            return;
        };

        let mut client = RECT::default();
        unsafe {
            let _ = GetClientRect(self.hwnd, &mut client);
        }
        let layout = MainLayout::for_client(client.right - client.left);

        for (hwnd, rect) in [
            (controls.welcome, layout.welcome),
            (controls.area_button, layout.area_button),
            (controls.query_button, layout.query_button),
        ] {
            let ControlRect { x, y, w, h } = rect;
            unsafe {
                let _ = MoveWindow(hwnd, x, y, w, h, true);
            }
        }
    }

    fn handle_command(&mut self, wparam: WPARAM) {
        match command_id(wparam) {
            ID_BTN_LEARN_AREA => self.open_calculator(),
            ID_BTN_QUERY_ONTOLOGY => self.query_ontology(),
            _ => {}
        }
    }

    fn open_calculator(&self) {
        if let Err(err) = CalculatorWindow::open(self.controller.clone()) {
            error!("Could not open calculator: {}", err);
            show_error(self.hwnd, ERROR_TITLE, &err.to_string());
        }
    }

    fn query_ontology(&self) {
        match self.controller.query_ontology() {
            QueryOutcome::Results(text) => show_info(self.hwnd, RESULTS_TITLE, &text),
            QueryOutcome::Failure { message } => show_error(self.hwnd, ERROR_TITLE, &message),
        }
    }

    fn release_fonts(&self) {
        if self.title_font != self.font {
            unsafe {
                let _ = DeleteObject(self.title_font);
            }
        }
    }
}

fn run_message_loop() -> Result<(), UiError> {
    unsafe {
        let mut msg = MSG::default();
        loop {
            match GetMessageW(&mut msg, None, 0, 0).0 {
                0 => return Ok(()),
                -1 => return Err(UiError::MessageLoopFailed),
                _ => {}
            }

            // Tab navigation between controls of whichever window has focus
            let root = GetAncestor(msg.hwnd, GA_ROOT);
            if root.0 != 0 && IsDialogMessageW(root, &msg).as_bool() {
                continue;
            }

            TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

unsafe extern "system" fn main_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_CREATE => {
            let createstruct = &*(lparam.0 as *const CREATESTRUCTW);
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, createstruct.lpCreateParams as isize);
            if let Some(state) = main_state_mut(hwnd) {
                state.hwnd = hwnd;
                if let Err(err) = state.build_controls() {
                    show_error(hwnd, ERROR_TITLE, &err.to_string());
                    return LRESULT(-1);
                }
            }
            LRESULT(0)
        }
        WM_SIZE => {
            if let Some(state) = main_state_mut(hwnd) {
                state.layout();
            }
            LRESULT(0)
        }
        WM_COMMAND => {
            if let Some(state) = main_state_mut(hwnd) {
                state.handle_command(wparam);
            }
            LRESULT(0)
        }
        WM_DESTROY => {
            PostQuitMessage(0);
            LRESULT(0)
        }
        WM_NCDESTROY => {
            // The state box is reclaimed by MainWindow::run after the loop.
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

unsafe fn main_state_mut(hwnd: HWND) -> Option<&'static mut MainWindowState> {
    let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut MainWindowState;
    if ptr.is_null() {
        None
    } else {
        Some(&mut *ptr)
    }
}
