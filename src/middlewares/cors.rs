use actix_cors::Cors;

pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        // 令牌通过 Authorization 头传递，不使用 Cookie
        .allow_any_header()
        .max_age(3600)
}
