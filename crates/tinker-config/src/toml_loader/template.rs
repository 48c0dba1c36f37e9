/// Default TOML config content with inline documentation comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Tinker Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[backend]
# api_url = "https://api.anthropic.com/v1/messages"
# model = "claude-sonnet-4-20250514"
# max_output_tokens = 1024     # 1-200000
# auth = "api_key"             # api_key, oauth
# system_prompt = "You are a helpful assistant."
# request_timeout_secs = 60    # unset = no timeout
# max_retries = 0              # 0-10, 0 = single attempt

[bridge]
# bind = "127.0.0.1"
# port = 19850                 # 1-65535
# max_input_len = 16384        # 1-1000000

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
}
