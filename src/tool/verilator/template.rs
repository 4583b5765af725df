pub const MAKEFILE: &str = "#Auto generated by edagen

include config.mk

#Assume a local installation if VERILATOR_ROOT is set
ifeq ($(VERILATOR_ROOT),)
VERILATOR ?= verilator
else
VERILATOR ?= $(VERILATOR_ROOT)/bin/verilator
endif

V$(TOP_MODULE): V$(TOP_MODULE).mk
\t$(MAKE) $(MAKE_OPTIONS) -f $<
V$(TOP_MODULE).mk:
\t$(EDA_LAUNCHER) $(VERILATOR) -f $(VC_FILE) $(VERILATOR_OPTIONS)

.PHONY: binary dpi-hdr-only lint-only preprocess-only xml-only
binary:
\t$(EDA_LAUNCHER) $(VERILATOR) --binary -f $(VC_FILE) $(VERILATOR_OPTIONS)
dpi-hdr-only:
\t$(EDA_LAUNCHER) $(VERILATOR) --dpi-hdr-only -f $(VC_FILE) $(VERILATOR_OPTIONS)
lint-only:
\t$(EDA_LAUNCHER) $(VERILATOR) --lint-only -f $(VC_FILE) $(VERILATOR_OPTIONS)
preprocess-only V$(TOP_MODULE).i:
\t$(EDA_LAUNCHER) $(VERILATOR) -E -f $(VC_FILE) $(VERILATOR_OPTIONS) > V$(TOP_MODULE).i
xml-only V$(TOP_MODULE).xml:
\t$(EDA_LAUNCHER) $(VERILATOR) --xml-only -f $(VC_FILE) $(VERILATOR_OPTIONS)
";

/// Renders make variables the static build file includes.
pub fn render_config(
    top_module: &str,
    command_file: &str,
    verilator_options: &[String],
    make_options: &[String],
) -> String {
    format!(
        "#Auto generated by edagen\n\
         \n\
         TOP_MODULE        := {}\n\
         VC_FILE           := {}\n\
         VERILATOR_OPTIONS := {}\n\
         MAKE_OPTIONS      := {}\n",
        top_module,
        command_file,
        verilator_options.join(" "),
        make_options.join(" ")
    )
}
