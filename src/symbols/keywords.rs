//! Fixed PyWright vocabulary
//!
//! Grouped roughly the way the engine documentation (`doc.txt`) lists them.

/// Command keywords
pub const COMMANDS: &[&str] = &[
    // Adding objects
    "emo", "gui", "Back", "Button", "Wait", "Input", "menu", "list", "li", "showlist",
    "forgetlist", "forgetlistitem", "present", "examine", "region",
    // Control flow
    "print", "include", "nt", "goto", "label", "penalty", "pause", "timer", "waitenter", "mus",
    "sfx", "movie", "exit", "endscript", "casemenu", "script", "top", "cross", "endcross",
    "statement", "resume", "cross_restart", "clearcross", "next_statement", "prev_statement",
    // Variables and flags
    "setflag", "delflag", "flag", "noflag", "set", "setvar", "joinvar", "addvar", "subvar",
    "divvar", "mulvar", "absvar", "random", "getvar", "is", "isnot", "isempty", "isnotempty",
    "isnumber", "exportvars", "importvars", "savegame", "loadgame", "deletegame",
    // Evidence
    "addev", "delev",
    // Special effects
    "draw_off", "draw_on", "scroll", "rotate",
    // Macros
    "macro", "endmacro",
    // data.txt fields
    "icon", "title", "author", "version",
    // Animation files
    "horizontal", "vertical", "length", "loops", "framedelay", "blinkmode", "blipsound",
    "framecompress",
    // Art types
    "fg", "bg", "ev",
    "zoom", "char", "delete", "shake", "is_ex", "setvar_ex",
    "filewrite", "screenshot", "bemo", "clear", "textblock", "textbox", "locked_cases",
    "addcase", "wincase", "resetcase", "examine3d", "localmenu", "region3d", "game",
    "controlanim", "globaldelay", "gamemenu", "getprop", "setprop", "debug", "fade", "grey",
    "invert", "tint",
    "in", "out", "obj",
];

/// Variables the engine reads or sets itself
pub const SPECIAL_VARIABLES: &[&str] = &[
    "_speaking",
    // Dev controls
    "_debug", "_return", "_preload",
    // Set by the engine
    "_layer_invisible", "_layer_bg", "_layer_char", "_layer_fg", "_layer_textbox", "_layer_gui",
    "_speaking_name", "_lastline", "_currentline", "_lastlabel", "_currentlabel", "_statement",
    "_selected", "_examine_offset_x", "_examine_offset_y", "_examine_click_x",
    "_examine_click_y",
    // Interface toggles
    "_default_port_fg_delay", "_default_fg_frame_delay", "_list_checked_img", "_bigbutton_img",
    "_textbox_show_button", "_textbox_show_recordbutton", "_textbox_lines", "_textbox_wrap",
    "_textbox_allow_skip", "_textbox_skipupdate", "_nt_image", "_examine_skipupdate",
    "_examine_showbars", "_examine_showcursor", "_examine_use", "_examine_mousedown",
    "_testimony_blinker", "_cr_button", "_allow_present_evidence", "_allow_present_profiles",
    "_allow_click_save", "_allow_saveload", "_allow_click_load",
    // Court record
    "_profiles_enable", "_profiles_present", "_evidence_enable", "_evidence_present",
    "_cr_back_button", "_list_back_button", "_menu_fade_level", "_double_screen_list_fade",
    "_flash_sound", "_shake_sound", "_music_loop",
    // intro.txt
    "_order_cases",
    "_list_bg_image", "_music_fade", "ev_mode_bg_logic", "_bigbutton_bg", "_production",
    "_ev_pages", "_ev", "_version",
];

/// Number of synthesized `_case_N` variables
pub const CASE_VARIABLE_COUNT: usize = 100;

/// `key=` prefixes of named parameters, matched with `starts_with`
pub const NAMED_PARAMETERS: &[&str] = &[
    "start=", "end=", "e=", "x=", "y=", "z=", "name=", "speed=", "width=", "height=",
    "rwidth=", "rheight=", "graphic=", "graphichigh=", "examine=", "talk=", "present=",
    "move=", "fail=", "nametag=", "result=", "label=", "mag=", "frames=", "hotkey=",
    "jumpto=", "pause=", "test=", "loops=", "rotz=", "be=", "pri=", "variable=", "threat=",
    "delay=", "color=", "run=", "priority=", "prop=", "value=", "degrees=", "axis=",
    "filter=", "after=",
];

/// Bare keyword parameters
pub const PARAMETERS: &[&str] = &[
    "stack", "nowait", "noclear", "hide", "fade", "true", "false", "noback", "sx", "sy",
    "blink", "loop", "noloop", "b", "t", "stop", "noauto", "password", "all", "suppress",
    "flipx", "wait", "hold", "try_bottom", "script", "last", "both",
];

/// Fixed markers recognised inside dialogue strings
pub const STRING_TOKENS: &[&str] = &["{n}", "{next}", "{f}", "{center}"];

/// Comparison and boolean operators used by `is` expressions
pub const LOGIC_OPERATORS: &[&str] = &["==", "<=", ">=", "<", ">", "NOT", "AND", "OR"];

/// Name of the `index`th case variable
pub fn case_variable(index: usize) -> String {
    format!("_case_{}", index)
}
