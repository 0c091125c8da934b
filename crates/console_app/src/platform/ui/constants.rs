pub const PROMPT_IDLE: &str = "> ";
pub const PROMPT_SEARCH: &str = "search> ";
pub const PROMPT_DOMAIN: &str = "domain> ";
pub const PROMPT_CRAWL: &str = "crawl (. to submit)> ";

pub const CRAWL_SUBMIT_LINE: &str = ".";

pub const HELP_TEXT: &str = "\
Commands:
  /                 focus the search input (next line is the query)
  search <query>    run a search
  open <n>          open result n in the browser
  admin             open the admin panel
  close | esc       close the admin panel
  domain [name]     add a seed domain (no name: type it on the next line)
  crawl [urls...]   submit URLs to crawl (no urls: one per line, '.' submits)
  crawl-clear       discard pending crawl URLs
  esc               also leaves a field you are typing into
  help              show this help
  quit              exit";

pub const SHORTCUT_HINTS: [&str; 2] = [
    "Press \"/\" to focus search input",
    "Press \"Escape\" (esc) to close the admin panel",
];
