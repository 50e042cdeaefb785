// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置设置测试模块
///
/// 测试配置加载和验证功能
/// 确保配置系统能够正确解析默认值和环境变量覆盖

#[cfg(test)]
mod tests {
    use newsrs::config::settings::Settings;

    // Defaults and the override run in one test so the environment
    // mutation cannot race a parallel Settings::new() call.
    #[test]
    fn test_defaults_and_environment_override() {
        let settings = Settings::new().expect("Failed to load configuration");

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.upstream.base_url, "https://news.ycombinator.com");
        assert!(settings.upstream.user_agent.contains("newsrs"));
        assert_eq!(settings.upstream.timeout_secs, 20);
        assert_eq!(settings.aggregator.page_timeout_ms, 30_000);

        std::env::set_var("NEWSRS__SERVER__PORT", "4100");
        std::env::set_var("NEWSRS__UPSTREAM__BASE_URL", "http://127.0.0.1:8080");
        let overridden = Settings::new().expect("Failed to load configuration");
        std::env::remove_var("NEWSRS__SERVER__PORT");
        std::env::remove_var("NEWSRS__UPSTREAM__BASE_URL");

        assert_eq!(overridden.server.port, 4100);
        assert_eq!(overridden.upstream.base_url, "http://127.0.0.1:8080");
    }
}
