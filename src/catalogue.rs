//! The bundled set of templates for a new application plugin.
//!
//! Paths are relative to the plugin's own directory. Bodies use `{{` and `}}`
//! for the literal braces of CMake and C++.

use crate::error::Result;
use crate::registry::TemplateRegistry;

const CMAKE_LISTS: &str = r#"file(GLOB HEADERS "include/{plugin_provider}/plugins/{plugin_name}/*.hpp")

add_library( {plugin_provider}_{plugin_name}
             ${{HEADERS}}
             {plugin_name}_plugin.cpp
             {plugin_name}_api.cpp
           )

target_link_libraries( {plugin_provider}_{plugin_name} btcm_app btcm_chain fc graphene_db )
target_include_directories( {plugin_provider}_{plugin_name}
                            PUBLIC "${{CMAKE_CURRENT_SOURCE_DIR}}/include" )
"#;

const API_HEADER: &str = r#"
#pragma once

#include <fc/api.hpp>

namespace btcm {{ namespace app {{
   struct api_context;
}} }}

namespace {plugin_provider} {{ namespace plugin {{ namespace {plugin_name} {{

namespace detail {{
class {plugin_name}_api_impl;
}}

class {plugin_name}_api
{{
   public:
      {plugin_name}_api( const btcm::app::api_context& ctx );

      void on_api_startup();

      // TODO:  Add API methods here

   private:
      std::shared_ptr< detail::{plugin_name}_api_impl > my;
}};

}} }} }}

FC_API( {plugin_provider}::plugin::{plugin_name}::{plugin_name}_api,
   // TODO:  Add method bubble list here
   )
"#;

const PLUGIN_HEADER: &str = r#"
#pragma once

#include <btcm/app/plugin.hpp>

namespace {plugin_provider} {{ namespace plugin {{ namespace {plugin_name} {{

class {plugin_name}_plugin : public btcm::app::plugin
{{
   public:
      {plugin_name}_plugin();
      virtual ~{plugin_name}_plugin();

      virtual std::string plugin_name()const override;
      virtual void plugin_initialize( const boost::program_options::variables_map& options ) override;
      virtual void plugin_startup() override;
      virtual void plugin_shutdown() override;
}};

}} }} }}
"#;

const API_SOURCE: &str = r#"
#include <btcm/app/api_context.hpp>
#include <btcm/app/application.hpp>

#include <{plugin_provider}/plugins/{plugin_name}/{plugin_name}_api.hpp>
#include <{plugin_provider}/plugins/{plugin_name}/{plugin_name}_plugin.hpp>

namespace {plugin_provider} {{ namespace plugin {{ namespace {plugin_name} {{

namespace detail {{

class {plugin_name}_api_impl
{{
   public:
      {plugin_name}_api_impl( btcm::app::application& _app );

      std::shared_ptr< {plugin_provider}::plugin::{plugin_name}::{plugin_name}_plugin > get_plugin();

      btcm::app::application& app;
}};

{plugin_name}_api_impl::{plugin_name}_api_impl( btcm::app::application& _app ) : app( _app )
{{}}

std::shared_ptr< {plugin_provider}::plugin::{plugin_name}::{plugin_name}_plugin > {plugin_name}_api_impl::get_plugin()
{{
   return app.get_plugin< {plugin_name}_plugin >( "{plugin_name}" );
}}

}} // detail

{plugin_name}_api::{plugin_name}_api( const btcm::app::api_context& ctx )
{{
   my = std::make_shared< detail::{plugin_name}_api_impl >(ctx.app);
}}

void {plugin_name}_api::on_api_startup() {{ }}

}} }} }} // {plugin_provider}::plugin::{plugin_name}
"#;

const PLUGIN_SOURCE: &str = r#"

#include <{plugin_provider}/plugins/{plugin_name}/{plugin_name}_api.hpp>
#include <{plugin_provider}/plugins/{plugin_name}/{plugin_name}_plugin.hpp>

#include <string>

namespace {plugin_provider} {{ namespace plugin {{ namespace {plugin_name} {{

{plugin_name}_plugin::{plugin_name}_plugin() {{}}
{plugin_name}_plugin::~{plugin_name}_plugin() {{}}

std::string {plugin_name}_plugin::plugin_name()const
{{
   return "{plugin_name}";
}}

void {plugin_name}_plugin::plugin_initialize( const boost::program_options::variables_map& options )
{{
}}

void {plugin_name}_plugin::plugin_startup()
{{
   chain::database& db = database();

   app().register_api_factory< {plugin_name}_api >( "{plugin_name}_api" );
}}

void {plugin_name}_plugin::plugin_shutdown()
{{
}}

}} }} }} // {plugin_provider}::plugin::{plugin_name}

BTCM_DEFINE_PLUGIN( {plugin_name}, {plugin_provider}::plugin::{plugin_name}::{plugin_name}_plugin )
"#;

/// Builds the registry of files making up a new plugin.
pub fn plugin_catalogue() -> Result<TemplateRegistry> {
    let mut registry = TemplateRegistry::new();
    registry
        .register("CMakeLists.txt", CMAKE_LISTS)?
        .register(
            "include/{plugin_provider}/plugins/{plugin_name}/{plugin_name}_api.hpp",
            API_HEADER,
        )?
        .register(
            "include/{plugin_provider}/plugins/{plugin_name}/{plugin_name}_plugin.hpp",
            PLUGIN_HEADER,
        )?
        .register("{plugin_name}_api.cpp", API_SOURCE)?
        .register("{plugin_name}_plugin.cpp", PLUGIN_SOURCE)?;
    Ok(registry)
}
