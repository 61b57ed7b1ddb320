//! Endpoint paths under the `/api` base prefix.

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_REGISTER: &str = "/auth/register";
pub const AUTH_USER: &str = "/auth/user";
pub const AUTH_PROFILE: &str = "/auth/profile";
pub const AUTH_PASSWORD: &str = "/auth/password";

pub const INSTAGRAM_INITIATE: &str = "/insta-connect/instagram/initiate";
pub const INSTAGRAM_CALLBACK: &str = "/insta-connect/instagram/callback";
pub const INSTAGRAM_DISCONNECT: &str = "/insta-connect/instagram/disconnect";
pub const INSTAGRAM_MEDIA: &str = "/insta-connect/media/media";

pub const PRODUCTS: &str = "/products";

pub const AMAZON_CONNECT: &str = "/amazon/connect";
pub const AMAZON_LISTINGS: &str = "/amazon/listings";

pub const ANALYTICS_DASHBOARD: &str = "/analytics/dashboard";
pub const ANALYTICS_SALES: &str = "/analytics/sales";

pub const CHATBOT: &str = "/chatbot";
