//! Modal message boxes
//!
//! Every popup the application shows goes through here so the owner window
//! is disabled while the message is up.

use crate::platform::windows::to_wstring;
use windows::core::PCWSTR;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    MessageBoxW, MB_ICONERROR, MB_ICONINFORMATION, MB_ICONWARNING, MB_OK, MESSAGEBOX_STYLE,
};

pub fn show_error(owner: HWND, title: &str, message: &str) {
    show_message(owner, title, message, MB_OK | MB_ICONERROR);
}

pub fn show_warning(owner: HWND, title: &str, message: &str) {
    show_message(owner, title, message, MB_OK | MB_ICONWARNING);
}

pub fn show_info(owner: HWND, title: &str, message: &str) {
    show_message(owner, title, message, MB_OK | MB_ICONINFORMATION);
}

fn show_message(owner: HWND, title: &str, message: &str, style: MESSAGEBOX_STYLE) {
    let wide_message = to_wstring(message);
    let wide_title = to_wstring(title);
    unsafe {
        MessageBoxW(
            owner,
            PCWSTR(wide_message.as_ptr()),
            PCWSTR(wide_title.as_ptr()),
            style,
        );
    }
}
