//! General Windows platform utilities
//!
//! Window class registration, control creation and text transfer helpers
//! shared by the main window and the calculator window.

use windows::core::PCWSTR;
use windows::Win32::Foundation::{GetLastError, HINSTANCE, HWND, LPARAM, LRESULT, WIN32_ERROR, WPARAM};
use windows::Win32::Graphics::Gdi::{
    CreateFontIndirectW, GetObjectW, GetStockObject, COLOR_WINDOW, DEFAULT_GUI_FONT, FW_BOLD,
    HBRUSH, HFONT, LOGFONTW,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::WindowsAndMessaging::*;

// Matches the Win32 ERROR_CLASS_ALREADY_EXISTS (1410) code.
const CLASS_ALREADY_EXISTS_ERR: WIN32_ERROR = WIN32_ERROR(1410);

pub type WindowProc = unsafe extern "system" fn(HWND, u32, WPARAM, LPARAM) -> LRESULT;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Failed to get module handle: {0}")]
    ModuleHandle(String),
    #[error("Failed to register window class {0}")]
    ClassRegistrationFailed(String),
    #[error("Failed to create control {0:?}")]
    ControlCreationFailed(String),
}

/// Opts the process into per-monitor DPI awareness
///
/// Must run before any window is created; failure only means the system
/// bitmap-scales our windows.
pub fn enable_dpi_awareness() -> bool {
    unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2).is_ok() }
}

pub fn module_instance() -> Result<HINSTANCE, PlatformError> {
    unsafe {
        let module = GetModuleHandleW(PCWSTR::null())
            .map_err(|e| PlatformError::ModuleHandle(format!("{:?}", e)))?;
        Ok(module.into())
    }
}

/// Registers a top-level window class, tolerating a class that is
/// already registered (calculator windows are opened repeatedly)
pub fn register_window_class(
    instance: HINSTANCE,
    class_name: PCWSTR,
    wnd_proc: WindowProc,
) -> Result<(), PlatformError> {
    unsafe {
        let wnd_class = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wnd_proc),
            hInstance: instance,
            hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
            hbrBackground: HBRUSH((COLOR_WINDOW.0 + 1) as isize),
            lpszClassName: class_name,
            ..Default::default()
        };

        if RegisterClassW(&wnd_class) == 0 {
            match GetLastError() {
                Err(err) if err.code() == CLASS_ALREADY_EXISTS_ERR.to_hresult() => {}
                _ => {
                    return Err(PlatformError::ClassRegistrationFailed(
                        class_name.to_string().unwrap_or_default(),
                    ))
                }
            }
        }
    }

    Ok(())
}

/// Creates a child control identified by `id` in its parent's WM_COMMAND
pub fn create_child(
    parent: HWND,
    class: PCWSTR,
    text: &str,
    style_bits: u32,
    ex_style: WINDOW_EX_STYLE,
    id: i32,
    rect: (i32, i32, i32, i32),
    font: HFONT,
) -> Result<HWND, PlatformError> {
    let wide = to_wstring(text);
    let (x, y, width, height) = rect;
    let hwnd = unsafe {
        CreateWindowExW(
            ex_style,
            class,
            PCWSTR(wide.as_ptr()),
            WINDOW_STYLE(WS_CHILD.0 | WS_VISIBLE.0 | style_bits),
            x,
            y,
            width,
            height,
            parent,
            HMENU(id as isize),
            None,
            None,
        )
    };

    if hwnd.0 == 0 {
        return Err(PlatformError::ControlCreationFailed(text.to_string()));
    }

    apply_font(hwnd, font);
    Ok(hwnd)
}

pub fn default_gui_font() -> HFONT {
    unsafe { HFONT(GetStockObject(DEFAULT_GUI_FONT).0) }
}

/// Bold variant of the default GUI font at the given pixel height
pub fn create_bold_font(height: i32) -> HFONT {
    unsafe {
        let base = default_gui_font();
        let mut logfont = LOGFONTW::default();
        GetObjectW(
            base,
            std::mem::size_of::<LOGFONTW>() as i32,
            Some(&mut logfont as *mut _ as *mut _),
        );
        logfont.lfHeight = -height;
        logfont.lfWeight = FW_BOLD.0 as i32;
        let font = CreateFontIndirectW(&logfont);
        if font.is_invalid() {
            base
        } else {
            font
        }
    }
}

pub fn apply_font(hwnd: HWND, font: HFONT) {
    unsafe {
        SendMessageW(hwnd, WM_SETFONT, WPARAM(font.0 as usize), LPARAM(1));
    }
}

pub fn read_control_text(hwnd: HWND) -> String {
    unsafe {
        let length = GetWindowTextLengthW(hwnd);
        if length <= 0 {
            return String::new();
        }

        let mut buffer = vec![0u16; length as usize + 1];
        let copied = GetWindowTextW(hwnd, &mut buffer);
        String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
    }
}

pub fn set_control_text(hwnd: HWND, text: &str) {
    let wide = to_wstring(text);
    unsafe {
        let _ = SetWindowTextW(hwnd, PCWSTR(wide.as_ptr()));
    }
}

/// Control identifier of a WM_COMMAND message
pub fn command_id(wparam: WPARAM) -> i32 {
    (wparam.0 & 0xFFFF) as i32
}

pub fn to_wstring(input: &str) -> Vec<u16> {
    input.encode_utf16().chain(std::iter::once(0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_strings_are_nul_terminated() {
        let wide = to_wstring("Area");
        assert_eq!(wide.len(), 5);
        assert_eq!(wide.last(), Some(&0));
    }

    #[test]
    fn command_id_uses_low_word() {
        assert_eq!(command_id(WPARAM((0x0001 << 16) | 0x0102)), 0x0102);
    }
}
