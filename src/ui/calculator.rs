//! Area calculator window implemented with raw Win32 controls.
//!
//! The window is modeless: every click on "Learn Area of Shapes" opens a new
//! one, and each keeps its own [`CalculatorState`]. The state box lives in
//! `GWLP_USERDATA` and is released on `WM_NCDESTROY`.

#![allow(unsafe_op_in_unsafe_fn)]

use std::ffi::c_void;

use crate::app::{AppController, CalculatorState};
use crate::platform::dialogs::show_warning;
use crate::platform::windows::{
    command_id, create_child, default_gui_font, module_instance, read_control_text,
    register_window_class, set_control_text, PlatformError,
};
use crate::ui::layout::{ControlRect, GridLayout};
use crate::ui::UiError;
use tracing::{debug, info};
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::HFONT;
use windows::Win32::UI::Input::KeyboardAndMouse::SetFocus;
use windows::Win32::UI::WindowsAndMessaging::*;

const CLASS_NAME: PCWSTR = w!("TutorAreaCalculator");

const ID_EDIT_BASE: i32 = 101;
const ID_EDIT_HEIGHT: i32 = 102;
const ID_EDIT_SIDE: i32 = 103;
const ID_BTN_TRIANGLE: i32 = 104;
const ID_BTN_SQUARE: i32 = 105;
const ID_RESULT: i32 = 106;

/// Public entry point for opening a calculator
pub struct CalculatorWindow;

impl CalculatorWindow {
    /// Opens an unowned top-level calculator. It lives independently of the
    /// main window and may outlast other calculators.
    pub fn open(controller: AppController) -> Result<HWND, UiError> {
        let instance = module_instance()?;
        register_window_class(instance, CLASS_NAME, calculator_wnd_proc)?;

        let title = controller.config().calculator_title.clone();
        let size = controller.config().calculator_window;
        let state = CalculatorWindowState::new(controller, title.clone());
        let state_ptr = Box::into_raw(Box::new(state));
        let wide_title = crate::platform::windows::to_wstring(&title);

        unsafe {
            let hwnd = CreateWindowExW(
                WS_EX_CONTROLPARENT,
                CLASS_NAME,
                PCWSTR(wide_title.as_ptr()),
                WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU | WS_MINIMIZEBOX | WS_THICKFRAME,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                size.width,
                size.height,
                None,
                None,
                instance,
                Some(state_ptr as *const c_void),
            );

            if hwnd.0 == 0 {
                let _ = Box::from_raw(state_ptr);
                return Err(UiError::WindowCreationFailed("calculator"));
            }
            (*state_ptr).owned_by_window = true;

            ShowWindow(hwnd, SW_SHOW);
            let _ = SetForegroundWindow(hwnd);
            info!("Opened calculator window {:?}", hwnd);
            Ok(hwnd)
        }
    }
}

struct CalculatorWindowState {
    hwnd: HWND,
    controller: AppController,
    display: CalculatorState,
    controls: Option<CalculatorControls>,
    font: HFONT,
    title: String,
    /// Set once CreateWindowExW has returned; until then `open` frees the box
    owned_by_window: bool,
}

#[derive(Debug, Clone, Copy)]
struct CalculatorControls {
    base_label: HWND,
    base_edit: HWND,
    height_label: HWND,
    height_edit: HWND,
    side_label: HWND,
    side_edit: HWND,
    triangle_button: HWND,
    square_button: HWND,
    result_label: HWND,
}

impl CalculatorControls {
    /// Grid positions, row-major like a two-column form
    fn placements(&self) -> [(HWND, i32, i32); 9] {
        [
            (self.base_label, 0, 0),
            (self.base_edit, 0, 1),
            (self.height_label, 1, 0),
            (self.height_edit, 1, 1),
            (self.side_label, 2, 0),
            (self.side_edit, 2, 1),
            (self.triangle_button, 3, 0),
            (self.square_button, 3, 1),
            (self.result_label, 4, 0),
        ]
    }
}

impl CalculatorWindowState {
    fn new(controller: AppController, title: String) -> Self {
        Self {
            hwnd: HWND(0),
            controller,
            display: CalculatorState::default(),
            controls: None,
            font: default_gui_font(),
            title,
            owned_by_window: false,
        }
    }

    fn build_controls(&mut self) -> Result<(), PlatformError> {
        let (parent, font) = (self.hwnd, self.font);
        let zero = (0, 0, 0, 0);

        let label = |text: &str, id: i32| {
            create_child(parent, w!("STATIC"), text, 0, WINDOW_EX_STYLE(0), id, zero, font)
        };
        let edit = |id: i32| {
            let style = WS_BORDER.0 | WS_TABSTOP.0 | (ES_AUTOHSCROLL as u32);
            create_child(parent, w!("EDIT"), "", style, WS_EX_CLIENTEDGE, id, zero, font)
        };
        let button = |text: &str, id: i32| {
            let style = WS_TABSTOP.0 | (BS_PUSHBUTTON as u32);
            create_child(parent, w!("BUTTON"), text, style, WINDOW_EX_STYLE(0), id, zero, font)
        };

        let controls = CalculatorControls {
            base_label: label("Base (Triangle Area):", 0)?,
            base_edit: edit(ID_EDIT_BASE)?,
            height_label: label("Height (Triangle Area):", 0)?,
            height_edit: edit(ID_EDIT_HEIGHT)?,
            side_label: label("Side (Square Area):", 0)?,
            side_edit: edit(ID_EDIT_SIDE)?,
            triangle_button: button("Calculate Triangle Area", ID_BTN_TRIANGLE)?,
            square_button: button("Calculate Square Area", ID_BTN_SQUARE)?,
            result_label: label(self.display.result_text(), ID_RESULT)?,
        };

        self.controls = Some(controls);
        self.layout();
        unsafe {
            let _ = SetFocus(controls.base_edit);
        }
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
        let grid = GridLayout::calculator(client.right - client.left, client.bottom - client.top);

        for (hwnd, row, col) in controls.placements() {
            let ControlRect { x, y, w, h } = grid.cell(row, col);
            unsafe {
                let _ = MoveWindow(hwnd, x, y, w, h, true);
            }
        }
    }

    fn handle_command(&mut self, wparam: WPARAM) {
        let Some(controls) = self.controls else {
            return;
        };

        let outcome = match command_id(wparam) {
            ID_BTN_TRIANGLE => {
                let base = read_control_text(controls.base_edit);
                let height = read_control_text(controls.height_edit);
                self.controller.calculate_triangle(&base, &height, &mut self.display)
            }
            ID_BTN_SQUARE => {
                let side = read_control_text(controls.side_edit);
                self.controller.calculate_square(&side, &mut self.display)
            }
            _ => return,
        };

        match outcome {
            Ok(()) => set_control_text(controls.result_label, self.display.result_text()),
            Err(err) => show_warning(self.hwnd, &self.title, &err.to_string()),
        }
    }
}

unsafe extern "system" fn calculator_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_CREATE => {
            let createstruct = &*(lparam.0 as *const CREATESTRUCTW);
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, createstruct.lpCreateParams as isize);
            if let Some(state) = calculator_state_mut(hwnd) {
                state.hwnd = hwnd;
                if let Err(err) = state.build_controls() {
                    show_warning(hwnd, &state.title, &err.to_string());
                    return LRESULT(-1);
                }
            }
            LRESULT(0)
        }
        WM_SIZE => {
            if let Some(state) = calculator_state_mut(hwnd) {
                state.layout();
            }
            LRESULT(0)
        }
        WM_COMMAND => {
            if let Some(state) = calculator_state_mut(hwnd) {
                state.handle_command(wparam);
            }
            LRESULT(0)
        }
        WM_NCDESTROY => {
            let ptr = SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0) as *mut CalculatorWindowState;
            if !ptr.is_null() && (*ptr).owned_by_window {
                drop(Box::from_raw(ptr));
                debug!("Calculator window {:?} released", hwnd);
            }
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

unsafe fn calculator_state_mut(hwnd: HWND) -> Option<&'static mut CalculatorWindowState> {
    let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut CalculatorWindowState;
    if ptr.is_null() {
        None
    } else {
        Some(&mut *ptr)
    }
}
