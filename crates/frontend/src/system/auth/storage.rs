//! Токены сессии в localStorage. Пара access/refresh живёт между
//! перезагрузками страницы; восстановлением сессии занимается AuthProvider.

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "hr_panel_access_token";
const REFRESH_TOKEN_KEY: &str = "hr_panel_refresh_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

pub fn refresh_token() -> Option<String> {
    read(REFRESH_TOKEN_KEY)
}

pub fn store_access_token(token: &str) {
    write(ACCESS_TOKEN_KEY, token);
}

/// Сохранить пару токенов после входа
pub fn store_session(access: &str, refresh: &str) {
    write(ACCESS_TOKEN_KEY, access);
    write(REFRESH_TOKEN_KEY, refresh);
}

/// Стереть сессию (выход или невалидный refresh)
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}
