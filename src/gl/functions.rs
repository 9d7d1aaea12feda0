// gldispatch/src/gl/functions.rs
//
//! The dispatch table.
//!
//! Each block is one operation and owns one slot. Every name listed in a block is an alias
//! for that slot, and carries the requirements under which a context offers it. A name with
//! no requirements is available in every context of every API.

use crate::gl::types::*;

use std::os::raw::c_void;

gl_functions! {
    // Queried during initialization, so never gated.
    GetString(name: GLenum) -> *const GLubyte {
        glGetString: [],
    }
    GetIntegerv(pname: GLenum, data: *mut GLint) {
        glGetIntegerv: [],
    }
    GetError() -> GLenum {
        glGetError: [],
    }
    GetStringi(name: GLenum, index: GLuint) -> *const GLubyte {
        glGetStringi: [gl(3, 0), gles2(3, 0)],
    }

    // Common to every API.
    Clear(mask: GLbitfield) {
        glClear: [],
    }
    ClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        glClearColor: [],
    }
    ClearStencil(s: GLint) {
        glClearStencil: [],
    }
    Viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        glViewport: [],
    }
    Scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        glScissor: [],
    }
    ReadPixels(x: GLint,
               y: GLint,
               width: GLsizei,
               height: GLsizei,
               format: GLenum,
               type_: GLenum,
               pixels: *mut c_void) {
        glReadPixels: [],
    }
    Enable(cap: GLenum) {
        glEnable: [],
    }
    Disable(cap: GLenum) {
        glDisable: [],
    }
    IsEnabled(cap: GLenum) -> GLboolean {
        glIsEnabled: [],
    }
    Finish() {
        glFinish: [],
    }
    Flush() {
        glFlush: [],
    }
    PixelStorei(pname: GLenum, param: GLint) {
        glPixelStorei: [],
    }
    GetFloatv(pname: GLenum, data: *mut GLfloat) {
        glGetFloatv: [],
    }
    GetBooleanv(pname: GLenum, data: *mut GLboolean) {
        glGetBooleanv: [],
    }
    BlendFunc(sfactor: GLenum, dfactor: GLenum) {
        glBlendFunc: [],
    }
    DepthFunc(func: GLenum) {
        glDepthFunc: [],
    }
    DepthMask(flag: GLboolean) {
        glDepthMask: [],
    }
    ColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean) {
        glColorMask: [],
    }
    CullFace(mode: GLenum) {
        glCullFace: [],
    }
    FrontFace(mode: GLenum) {
        glFrontFace: [],
    }
    LineWidth(width: GLfloat) {
        glLineWidth: [],
    }
    Hint(target: GLenum, mode: GLenum) {
        glHint: [],
    }
    StencilFunc(func: GLenum, ref_: GLint, mask: GLuint) {
        glStencilFunc: [],
    }
    StencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum) {
        glStencilOp: [],
    }
    StencilMask(mask: GLuint) {
        glStencilMask: [],
    }
    TexParameteri(target: GLenum, pname: GLenum, param: GLint) {
        glTexParameteri: [],
    }
    TexImage2D(target: GLenum,
               level: GLint,
               internalformat: GLint,
               width: GLsizei,
               height: GLsizei,
               border: GLint,
               format: GLenum,
               type_: GLenum,
               pixels: *const c_void) {
        glTexImage2D: [],
    }

    // OpenGL 1.1 and its extensions.
    BindTexture(target: GLenum, texture: GLuint) {
        glBindTexture: [gl(1, 1), gles1(1, 0), gles2(2, 0)],
        glBindTextureEXT: [ext("GL_EXT_texture_object")],
    }
    GenTextures(n: GLsizei, textures: *mut GLuint) {
        glGenTextures: [gl(1, 1), gles1(1, 0), gles2(2, 0)],
        glGenTexturesEXT: [ext("GL_EXT_texture_object")],
    }
    DeleteTextures(n: GLsizei, textures: *const GLuint) {
        glDeleteTextures: [gl(1, 1), gles1(1, 0), gles2(2, 0)],
        glDeleteTexturesEXT: [ext("GL_EXT_texture_object")],
    }
    IsTexture(texture: GLuint) -> GLboolean {
        glIsTexture: [gl(1, 1), gles1(1, 0), gles2(2, 0)],
        glIsTextureEXT: [ext("GL_EXT_texture_object")],
    }
    TexSubImage2D(target: GLenum,
                  level: GLint,
                  xoffset: GLint,
                  yoffset: GLint,
                  width: GLsizei,
                  height: GLsizei,
                  format: GLenum,
                  type_: GLenum,
                  pixels: *const c_void) {
        glTexSubImage2D: [gl(1, 1), gles1(1, 0), gles2(2, 0)],
        glTexSubImage2DEXT: [ext("GL_EXT_subtexture")],
    }
    CopyTexImage2D(target: GLenum,
                   level: GLint,
                   internalformat: GLenum,
                   x: GLint,
                   y: GLint,
                   width: GLsizei,
                   height: GLsizei,
                   border: GLint) {
        glCopyTexImage2D: [gl(1, 1), gles1(1, 0), gles2(2, 0)],
        glCopyTexImage2DEXT: [ext("GL_EXT_copy_texture")],
    }
    DrawArrays(mode: GLenum, first: GLint, count: GLsizei) {
        glDrawArrays: [gl(1, 1), gles1(1, 0), gles2(2, 0)],
        glDrawArraysEXT: [ext("GL_EXT_vertex_array")],
    }
    DrawElements(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void) {
        glDrawElements: [gl(1, 1), gles1(1, 0), gles2(2, 0)],
    }
    PolygonOffset(factor: GLfloat, units: GLfloat) {
        glPolygonOffset: [gl(1, 1), gles1(1, 0), gles2(2, 0)],
        glPolygonOffsetEXT: [ext("GL_EXT_polygon_offset")],
    }

    // Desktop OpenGL only.
    ClearDepth(depth: GLdouble) {
        glClearDepth: [gl(1, 0)],
    }
    Ortho(left: GLdouble,
          right: GLdouble,
          bottom: GLdouble,
          top: GLdouble,
          near: GLdouble,
          far: GLdouble) {
        glOrtho: [gl(1, 0)],
    }
    Begin(mode: GLenum) {
        glBegin: [gl(1, 0)],
    }
    End() {
        glEnd: [gl(1, 0)],
    }
    Vertex2f(x: GLfloat, y: GLfloat) {
        glVertex2f: [gl(1, 0)],
    }
    Vertex3f(x: GLfloat, y: GLfloat, z: GLfloat) {
        glVertex3f: [gl(1, 0)],
    }
    DrawBuffer(buf: GLenum) {
        glDrawBuffer: [gl(1, 0)],
    }
    ReadBuffer(src: GLenum) {
        glReadBuffer: [gl(1, 0), gles2(3, 0)],
        glReadBufferNV: [ext("GL_NV_read_buffer")],
    }
    PolygonMode(face: GLenum, mode: GLenum) {
        glPolygonMode: [gl(1, 0)],
        glPolygonModeNV: [ext("GL_NV_polygon_mode")],
    }
    GetTexImage(target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut c_void) {
        glGetTexImage: [gl(1, 0)],
    }

    // Fixed function, shared by desktop OpenGL and OpenGL ES 1.x.
    MatrixMode(mode: GLenum) {
        glMatrixMode: [gl(1, 0), gles1(1, 0)],
    }
    LoadIdentity() {
        glLoadIdentity: [gl(1, 0), gles1(1, 0)],
    }
    PushMatrix() {
        glPushMatrix: [gl(1, 0), gles1(1, 0)],
    }
    PopMatrix() {
        glPopMatrix: [gl(1, 0), gles1(1, 0)],
    }
    Translatef(x: GLfloat, y: GLfloat, z: GLfloat) {
        glTranslatef: [gl(1, 0), gles1(1, 0)],
    }
    Rotatef(angle: GLfloat, x: GLfloat, y: GLfloat, z: GLfloat) {
        glRotatef: [gl(1, 0), gles1(1, 0)],
    }
    Scalef(x: GLfloat, y: GLfloat, z: GLfloat) {
        glScalef: [gl(1, 0), gles1(1, 0)],
    }
    Color4f(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        glColor4f: [gl(1, 0), gles1(1, 0)],
    }
    ShadeModel(mode: GLenum) {
        glShadeModel: [gl(1, 0), gles1(1, 0)],
    }
    AlphaFunc(func: GLenum, ref_: GLfloat) {
        glAlphaFunc: [gl(1, 0), gles1(1, 0)],
    }
    EnableClientState(array: GLenum) {
        glEnableClientState: [gl(1, 1), gles1(1, 0)],
    }
    DisableClientState(array: GLenum) {
        glDisableClientState: [gl(1, 1), gles1(1, 0)],
    }
    VertexPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void) {
        glVertexPointer: [gl(1, 1), gles1(1, 0)],
    }
    ColorPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void) {
        glColorPointer: [gl(1, 1), gles1(1, 0)],
    }
    TexCoordPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void) {
        glTexCoordPointer: [gl(1, 1), gles1(1, 0)],
    }

    // Single-precision variants from OpenGL ES.
    Orthof(left: GLfloat, right: GLfloat, bottom: GLfloat, top: GLfloat, near: GLfloat, far: GLfloat) {
        glOrthof: [gles1(1, 0)],
        glOrthofOES: [ext("GL_OES_single_precision")],
    }
    ClearDepthf(depth: GLfloat) {
        glClearDepthf: [gl(4, 1), gles1(1, 0), gles2(2, 0), ext("GL_ARB_ES2_compatibility")],
        glClearDepthfOES: [ext("GL_OES_single_precision")],
    }

    // OpenGL 1.3.
    ActiveTexture(texture: GLenum) {
        glActiveTexture: [gl(1, 3), gles1(1, 0), gles2(2, 0)],
        glActiveTextureARB: [ext("GL_ARB_multitexture")],
    }
    SampleCoverage(value: GLfloat, invert: GLboolean) {
        glSampleCoverage: [gl(1, 3), gles1(1, 0), gles2(2, 0)],
        glSampleCoverageARB: [ext("GL_ARB_multisample")],
    }
    CompressedTexImage2D(target: GLenum,
                         level: GLint,
                         internalformat: GLenum,
                         width: GLsizei,
                         height: GLsizei,
                         border: GLint,
                         image_size: GLsizei,
                         data: *const c_void) {
        glCompressedTexImage2D: [gl(1, 3), gles1(1, 0), gles2(2, 0)],
        glCompressedTexImage2DARB: [ext("GL_ARB_texture_compression")],
    }

    // OpenGL 1.4.
    BlendFuncSeparate(sfactor_rgb: GLenum,
                      dfactor_rgb: GLenum,
                      sfactor_alpha: GLenum,
                      dfactor_alpha: GLenum) {
        glBlendFuncSeparate: [gl(1, 4), gles2(2, 0)],
        glBlendFuncSeparateEXT: [ext("GL_EXT_blend_func_separate")],
        glBlendFuncSeparateOES: [ext("GL_OES_blend_func_separate")],
    }
    BlendEquation(mode: GLenum) {
        glBlendEquation: [gl(1, 4), gles2(2, 0)],
        glBlendEquationEXT: [ext("GL_EXT_blend_minmax")],
        glBlendEquationOES: [ext("GL_OES_blend_subtract")],
    }
    BlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        glBlendColor: [gl(1, 4), gles2(2, 0)],
        glBlendColorEXT: [ext("GL_EXT_blend_color")],
    }

    // Buffer objects.
    GenBuffers(n: GLsizei, buffers: *mut GLuint) {
        glGenBuffers: [gl(1, 5), gles1(1, 1), gles2(2, 0)],
        glGenBuffersARB: [ext("GL_ARB_vertex_buffer_object")],
    }
    BindBuffer(target: GLenum, buffer: GLuint) {
        glBindBuffer: [gl(1, 5), gles1(1, 1), gles2(2, 0)],
        glBindBufferARB: [ext("GL_ARB_vertex_buffer_object")],
    }
    DeleteBuffers(n: GLsizei, buffers: *const GLuint) {
        glDeleteBuffers: [gl(1, 5), gles1(1, 1), gles2(2, 0)],
        glDeleteBuffersARB: [ext("GL_ARB_vertex_buffer_object")],
    }
    IsBuffer(buffer: GLuint) -> GLboolean {
        glIsBuffer: [gl(1, 5), gles1(1, 1), gles2(2, 0)],
        glIsBufferARB: [ext("GL_ARB_vertex_buffer_object")],
    }
    BufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum) {
        glBufferData: [gl(1, 5), gles1(1, 1), gles2(2, 0)],
        glBufferDataARB: [ext("GL_ARB_vertex_buffer_object")],
    }
    BufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void) {
        glBufferSubData: [gl(1, 5), gles1(1, 1), gles2(2, 0)],
        glBufferSubDataARB: [ext("GL_ARB_vertex_buffer_object")],
    }
    MapBuffer(target: GLenum, access: GLenum) -> *mut c_void {
        glMapBuffer: [gl(1, 5)],
        glMapBufferARB: [ext("GL_ARB_vertex_buffer_object")],
        glMapBufferOES: [ext("GL_OES_mapbuffer")],
    }
    UnmapBuffer(target: GLenum) -> GLboolean {
        glUnmapBuffer: [gl(1, 5), gles2(3, 0)],
        glUnmapBufferARB: [ext("GL_ARB_vertex_buffer_object")],
        glUnmapBufferOES: [ext("GL_OES_mapbuffer")],
    }
    MapBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield)
                   -> *mut c_void {
        glMapBufferRange: [gl(3, 0), gles2(3, 0), ext("GL_ARB_map_buffer_range")],
        glMapBufferRangeEXT: [ext("GL_EXT_map_buffer_range")],
    }
    BufferStorage(target: GLenum, size: GLsizeiptr, data: *const c_void, flags: GLbitfield) {
        glBufferStorage: [gl(4, 4), ext("GL_ARB_buffer_storage")],
        glBufferStorageEXT: [ext("GL_EXT_buffer_storage")],
    }

    // Queries.
    GenQueries(n: GLsizei, ids: *mut GLuint) {
        glGenQueries: [gl(1, 5), gles2(3, 0)],
        glGenQueriesARB: [ext("GL_ARB_occlusion_query")],
        glGenQueriesEXT: [ext("GL_EXT_occlusion_query_boolean"), ext("GL_EXT_disjoint_timer_query")],
    }
    DeleteQueries(n: GLsizei, ids: *const GLuint) {
        glDeleteQueries: [gl(1, 5), gles2(3, 0)],
        glDeleteQueriesARB: [ext("GL_ARB_occlusion_query")],
        glDeleteQueriesEXT: [
            ext("GL_EXT_occlusion_query_boolean"),
            ext("GL_EXT_disjoint_timer_query"),
        ],
    }
    BeginQuery(target: GLenum, id: GLuint) {
        glBeginQuery: [gl(1, 5), gles2(3, 0)],
        glBeginQueryARB: [ext("GL_ARB_occlusion_query")],
        glBeginQueryEXT: [ext("GL_EXT_occlusion_query_boolean"), ext("GL_EXT_disjoint_timer_query")],
    }
    EndQuery(target: GLenum) {
        glEndQuery: [gl(1, 5), gles2(3, 0)],
        glEndQueryARB: [ext("GL_ARB_occlusion_query")],
        glEndQueryEXT: [ext("GL_EXT_occlusion_query_boolean"), ext("GL_EXT_disjoint_timer_query")],
    }
    GetQueryObjectuiv(id: GLuint, pname: GLenum, params: *mut GLuint) {
        glGetQueryObjectuiv: [gl(1, 5), gles2(3, 0)],
        glGetQueryObjectuivARB: [ext("GL_ARB_occlusion_query")],
        glGetQueryObjectuivEXT: [
            ext("GL_EXT_occlusion_query_boolean"),
            ext("GL_EXT_disjoint_timer_query"),
        ],
    }
    QueryCounter(id: GLuint, target: GLenum) {
        glQueryCounter: [gl(3, 3), ext("GL_ARB_timer_query")],
        glQueryCounterEXT: [ext("GL_EXT_disjoint_timer_query")],
    }
    GetQueryObjectui64v(id: GLuint, pname: GLenum, params: *mut GLuint64) {
        glGetQueryObjectui64v: [gl(3, 3), ext("GL_ARB_timer_query")],
        glGetQueryObjectui64vEXT: [
            ext("GL_EXT_timer_query"),
            ext("GL_EXT_disjoint_timer_query"),
        ],
    }

    // Shaders and programs.
    CreateShader(type_: GLenum) -> GLuint {
        glCreateShader: [gl(2, 0), gles2(2, 0)],
    }
    ShaderSource(shader: GLuint,
                 count: GLsizei,
                 string: *const *const GLchar,
                 length: *const GLint) {
        glShaderSource: [gl(2, 0), gles2(2, 0)],
    }
    CompileShader(shader: GLuint) {
        glCompileShader: [gl(2, 0), gles2(2, 0)],
    }
    GetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint) {
        glGetShaderiv: [gl(2, 0), gles2(2, 0)],
    }
    GetShaderInfoLog(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar) {
        glGetShaderInfoLog: [gl(2, 0), gles2(2, 0)],
    }
    DeleteShader(shader: GLuint) {
        glDeleteShader: [gl(2, 0), gles2(2, 0)],
    }
    CreateProgram() -> GLuint {
        glCreateProgram: [gl(2, 0), gles2(2, 0)],
    }
    AttachShader(program: GLuint, shader: GLuint) {
        glAttachShader: [gl(2, 0), gles2(2, 0)],
    }
    LinkProgram(program: GLuint) {
        glLinkProgram: [gl(2, 0), gles2(2, 0)],
    }
    GetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint) {
        glGetProgramiv: [gl(2, 0), gles2(2, 0)],
    }
    GetProgramInfoLog(program: GLuint,
                      buf_size: GLsizei,
                      length: *mut GLsizei,
                      info_log: *mut GLchar) {
        glGetProgramInfoLog: [gl(2, 0), gles2(2, 0)],
    }
    UseProgram(program: GLuint) {
        glUseProgram: [gl(2, 0), gles2(2, 0)],
    }
    DeleteProgram(program: GLuint) {
        glDeleteProgram: [gl(2, 0), gles2(2, 0)],
    }
    BindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar) {
        glBindAttribLocation: [gl(2, 0), gles2(2, 0)],
    }
    GetAttribLocation(program: GLuint, name: *const GLchar) -> GLint {
        glGetAttribLocation: [gl(2, 0), gles2(2, 0)],
    }
    GetUniformLocation(program: GLuint, name: *const GLchar) -> GLint {
        glGetUniformLocation: [gl(2, 0), gles2(2, 0)],
    }
    Uniform1i(location: GLint, v0: GLint) {
        glUniform1i: [gl(2, 0), gles2(2, 0)],
        glUniform1iARB: [ext("GL_ARB_shader_objects")],
    }
    Uniform1f(location: GLint, v0: GLfloat) {
        glUniform1f: [gl(2, 0), gles2(2, 0)],
        glUniform1fARB: [ext("GL_ARB_shader_objects")],
    }
    Uniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat) {
        glUniform4f: [gl(2, 0), gles2(2, 0)],
        glUniform4fARB: [ext("GL_ARB_shader_objects")],
    }
    Uniform4fv(location: GLint, count: GLsizei, value: *const GLfloat) {
        glUniform4fv: [gl(2, 0), gles2(2, 0)],
        glUniform4fvARB: [ext("GL_ARB_shader_objects")],
    }
    UniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) {
        glUniformMatrix4fv: [gl(2, 0), gles2(2, 0)],
        glUniformMatrix4fvARB: [ext("GL_ARB_shader_objects")],
    }
    StencilFuncSeparate(face: GLenum, func: GLenum, ref_: GLint, mask: GLuint) {
        glStencilFuncSeparate: [gl(2, 0), gles2(2, 0)],
    }
    StencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum) {
        glStencilOpSeparate: [gl(2, 0), gles2(2, 0)],
    }
    DrawBuffers(n: GLsizei, bufs: *const GLenum) {
        glDrawBuffers: [gl(2, 0), gles2(3, 0)],
        glDrawBuffersARB: [ext("GL_ARB_draw_buffers")],
        glDrawBuffersATI: [ext("GL_ATI_draw_buffers")],
        glDrawBuffersEXT: [ext("GL_EXT_draw_buffers")],
    }

    // Vertex attributes.
    EnableVertexAttribArray(index: GLuint) {
        glEnableVertexAttribArray: [gl(2, 0), gles2(2, 0)],
        glEnableVertexAttribArrayARB: [ext("GL_ARB_vertex_program")],
    }
    DisableVertexAttribArray(index: GLuint) {
        glDisableVertexAttribArray: [gl(2, 0), gles2(2, 0)],
        glDisableVertexAttribArrayARB: [ext("GL_ARB_vertex_program")],
    }
    VertexAttribPointer(index: GLuint,
                        size: GLint,
                        type_: GLenum,
                        normalized: GLboolean,
                        stride: GLsizei,
                        pointer: *const c_void) {
        glVertexAttribPointer: [gl(2, 0), gles2(2, 0)],
        glVertexAttribPointerARB: [ext("GL_ARB_vertex_program")],
    }
    VertexAttrib4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        glVertexAttrib4f: [gl(2, 0), gles2(2, 0)],
        glVertexAttrib4fARB: [ext("GL_ARB_vertex_program")],
    }
    VertexAttribIPointer(index: GLuint,
                         size: GLint,
                         type_: GLenum,
                         stride: GLsizei,
                         pointer: *const c_void) {
        glVertexAttribIPointer: [gl(3, 0), gles2(3, 0)],
        glVertexAttribIPointerEXT: [ext("GL_EXT_gpu_shader4")],
    }
    BindFragDataLocation(program: GLuint, color: GLuint, name: *const GLchar) {
        glBindFragDataLocation: [gl(3, 0)],
        glBindFragDataLocationEXT: [ext("GL_EXT_gpu_shader4")],
    }

    // Vertex array objects.
    GenVertexArrays(n: GLsizei, arrays: *mut GLuint) {
        glGenVertexArrays: [gl(3, 0), gles2(3, 0), ext("GL_ARB_vertex_array_object")],
        glGenVertexArraysAPPLE: [ext("GL_APPLE_vertex_array_object")],
        glGenVertexArraysOES: [ext("GL_OES_vertex_array_object")],
    }
    BindVertexArray(array: GLuint) {
        glBindVertexArray: [gl(3, 0), gles2(3, 0), ext("GL_ARB_vertex_array_object")],
        glBindVertexArrayAPPLE: [ext("GL_APPLE_vertex_array_object")],
        glBindVertexArrayOES: [ext("GL_OES_vertex_array_object")],
    }
    DeleteVertexArrays(n: GLsizei, arrays: *const GLuint) {
        glDeleteVertexArrays: [gl(3, 0), gles2(3, 0), ext("GL_ARB_vertex_array_object")],
        glDeleteVertexArraysAPPLE: [ext("GL_APPLE_vertex_array_object")],
        glDeleteVertexArraysOES: [ext("GL_OES_vertex_array_object")],
    }
    IsVertexArray(array: GLuint) -> GLboolean {
        glIsVertexArray: [gl(3, 0), gles2(3, 0), ext("GL_ARB_vertex_array_object")],
        glIsVertexArrayAPPLE: [ext("GL_APPLE_vertex_array_object")],
        glIsVertexArrayOES: [ext("GL_OES_vertex_array_object")],
    }

    // Framebuffer objects.
    GenFramebuffers(n: GLsizei, framebuffers: *mut GLuint) {
        glGenFramebuffers: [gl(3, 0), gles2(2, 0), ext("GL_ARB_framebuffer_object")],
        glGenFramebuffersEXT: [ext("GL_EXT_framebuffer_object")],
        glGenFramebuffersOES: [ext("GL_OES_framebuffer_object")],
    }
    BindFramebuffer(target: GLenum, framebuffer: GLuint) {
        glBindFramebuffer: [gl(3, 0), gles2(2, 0), ext("GL_ARB_framebuffer_object")],
        glBindFramebufferEXT: [ext("GL_EXT_framebuffer_object")],
        glBindFramebufferOES: [ext("GL_OES_framebuffer_object")],
    }
    DeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint) {
        glDeleteFramebuffers: [gl(3, 0), gles2(2, 0), ext("GL_ARB_framebuffer_object")],
        glDeleteFramebuffersEXT: [ext("GL_EXT_framebuffer_object")],
        glDeleteFramebuffersOES: [ext("GL_OES_framebuffer_object")],
    }
    IsFramebuffer(framebuffer: GLuint) -> GLboolean {
        glIsFramebuffer: [gl(3, 0), gles2(2, 0), ext("GL_ARB_framebuffer_object")],
        glIsFramebufferEXT: [ext("GL_EXT_framebuffer_object")],
        glIsFramebufferOES: [ext("GL_OES_framebuffer_object")],
    }
    CheckFramebufferStatus(target: GLenum) -> GLenum {
        glCheckFramebufferStatus: [gl(3, 0), gles2(2, 0), ext("GL_ARB_framebuffer_object")],
        glCheckFramebufferStatusEXT: [ext("GL_EXT_framebuffer_object")],
        glCheckFramebufferStatusOES: [ext("GL_OES_framebuffer_object")],
    }
    FramebufferTexture2D(target: GLenum,
                         attachment: GLenum,
                         textarget: GLenum,
                         texture: GLuint,
                         level: GLint) {
        glFramebufferTexture2D: [gl(3, 0), gles2(2, 0), ext("GL_ARB_framebuffer_object")],
        glFramebufferTexture2DEXT: [ext("GL_EXT_framebuffer_object")],
        glFramebufferTexture2DOES: [ext("GL_OES_framebuffer_object")],
    }
    FramebufferRenderbuffer(target: GLenum,
                            attachment: GLenum,
                            renderbuffertarget: GLenum,
                            renderbuffer: GLuint) {
        glFramebufferRenderbuffer: [gl(3, 0), gles2(2, 0), ext("GL_ARB_framebuffer_object")],
        glFramebufferRenderbufferEXT: [ext("GL_EXT_framebuffer_object")],
        glFramebufferRenderbufferOES: [ext("GL_OES_framebuffer_object")],
    }
    GenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint) {
        glGenRenderbuffers: [gl(3, 0), gles2(2, 0), ext("GL_ARB_framebuffer_object")],
        glGenRenderbuffersEXT: [ext("GL_EXT_framebuffer_object")],
        glGenRenderbuffersOES: [ext("GL_OES_framebuffer_object")],
    }
    BindRenderbuffer(target: GLenum, renderbuffer: GLuint) {
        glBindRenderbuffer: [gl(3, 0), gles2(2, 0), ext("GL_ARB_framebuffer_object")],
        glBindRenderbufferEXT: [ext("GL_EXT_framebuffer_object")],
        glBindRenderbufferOES: [ext("GL_OES_framebuffer_object")],
    }
    DeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint) {
        glDeleteRenderbuffers: [gl(3, 0), gles2(2, 0), ext("GL_ARB_framebuffer_object")],
        glDeleteRenderbuffersEXT: [ext("GL_EXT_framebuffer_object")],
        glDeleteRenderbuffersOES: [ext("GL_OES_framebuffer_object")],
    }
    RenderbufferStorage(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei) {
        glRenderbufferStorage: [gl(3, 0), gles2(2, 0), ext("GL_ARB_framebuffer_object")],
        glRenderbufferStorageEXT: [ext("GL_EXT_framebuffer_object")],
        glRenderbufferStorageOES: [ext("GL_OES_framebuffer_object")],
    }
    GenerateMipmap(target: GLenum) {
        glGenerateMipmap: [gl(3, 0), gles2(2, 0), ext("GL_ARB_framebuffer_object")],
        glGenerateMipmapEXT: [ext("GL_EXT_framebuffer_object")],
        glGenerateMipmapOES: [ext("GL_OES_framebuffer_object")],
    }
    BlitFramebuffer(src_x0: GLint,
                    src_y0: GLint,
                    src_x1: GLint,
                    src_y1: GLint,
                    dst_x0: GLint,
                    dst_y0: GLint,
                    dst_x1: GLint,
                    dst_y1: GLint,
                    mask: GLbitfield,
                    filter: GLenum) {
        glBlitFramebuffer: [gl(3, 0), gles2(3, 0), ext("GL_ARB_framebuffer_object")],
        glBlitFramebufferANGLE: [ext("GL_ANGLE_framebuffer_blit")],
        glBlitFramebufferEXT: [ext("GL_EXT_framebuffer_blit")],
        glBlitFramebufferNV: [ext("GL_NV_framebuffer_blit")],
    }
    RenderbufferStorageMultisample(target: GLenum,
                                   samples: GLsizei,
                                   internalformat: GLenum,
                                   width: GLsizei,
                                   height: GLsizei) {
        glRenderbufferStorageMultisample: [
            gl(3, 0),
            gles2(3, 0),
            ext("GL_ARB_framebuffer_object"),
        ],
        glRenderbufferStorageMultisampleANGLE: [ext("GL_ANGLE_framebuffer_multisample")],
        glRenderbufferStorageMultisampleEXT: [ext("GL_EXT_framebuffer_multisample")],
    }
    ClearBufferfv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat) {
        glClearBufferfv: [gl(3, 0), gles2(3, 0)],
    }

    // Instancing and uniform blocks.
    DrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei) {
        glDrawArraysInstanced: [gl(3, 1), gles2(3, 0)],
        glDrawArraysInstancedANGLE: [ext("GL_ANGLE_instanced_arrays")],
        glDrawArraysInstancedARB: [ext("GL_ARB_draw_instanced")],
        glDrawArraysInstancedEXT: [ext("GL_EXT_draw_instanced")],
    }
    PrimitiveRestartIndex(index: GLuint) {
        glPrimitiveRestartIndex: [gl(3, 1)],
        glPrimitiveRestartIndexNV: [ext("GL_NV_primitive_restart")],
    }
    GetUniformBlockIndex(program: GLuint, uniform_block_name: *const GLchar) -> GLuint {
        glGetUniformBlockIndex: [gl(3, 1), gles2(3, 0), ext("GL_ARB_uniform_buffer_object")],
    }

    // Sync objects.
    FenceSync(condition: GLenum, flags: GLbitfield) -> GLsync {
        glFenceSync: [gl(3, 2), gles2(3, 0), ext("GL_ARB_sync")],
        glFenceSyncAPPLE: [ext("GL_APPLE_sync")],
    }
    ClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum {
        glClientWaitSync: [gl(3, 2), gles2(3, 0), ext("GL_ARB_sync")],
        glClientWaitSyncAPPLE: [ext("GL_APPLE_sync")],
    }
    DeleteSync(sync: GLsync) {
        glDeleteSync: [gl(3, 2), gles2(3, 0), ext("GL_ARB_sync")],
        glDeleteSyncAPPLE: [ext("GL_APPLE_sync")],
    }
    IsSync(sync: GLsync) -> GLboolean {
        glIsSync: [gl(3, 2), gles2(3, 0), ext("GL_ARB_sync")],
        glIsSyncAPPLE: [ext("GL_APPLE_sync")],
    }
    TexImage2DMultisample(target: GLenum,
                          samples: GLsizei,
                          internalformat: GLenum,
                          width: GLsizei,
                          height: GLsizei,
                          fixedsamplelocations: GLboolean) {
        glTexImage2DMultisample: [gl(3, 2), ext("GL_ARB_texture_multisample")],
    }

    // Sampler objects.
    GenSamplers(count: GLsizei, samplers: *mut GLuint) {
        glGenSamplers: [gl(3, 3), gles2(3, 0), ext("GL_ARB_sampler_objects")],
    }
    BindSampler(unit: GLuint, sampler: GLuint) {
        glBindSampler: [gl(3, 3), gles2(3, 0), ext("GL_ARB_sampler_objects")],
    }
    SamplerParameteri(sampler: GLuint, pname: GLenum, param: GLint) {
        glSamplerParameteri: [gl(3, 3), gles2(3, 0), ext("GL_ARB_sampler_objects")],
    }

    // OpenGL 4.x and OpenGL ES 3.1.
    TexStorage2D(target: GLenum,
                 levels: GLsizei,
                 internalformat: GLenum,
                 width: GLsizei,
                 height: GLsizei) {
        glTexStorage2D: [gl(4, 2), gles2(3, 0), ext("GL_ARB_texture_storage")],
        glTexStorage2DEXT: [ext("GL_EXT_texture_storage")],
    }
    MemoryBarrier(barriers: GLbitfield) {
        glMemoryBarrier: [gl(4, 2), gles2(3, 1), ext("GL_ARB_shader_image_load_store")],
        glMemoryBarrierEXT: [ext("GL_EXT_shader_image_load_store")],
    }
    DispatchCompute(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint) {
        glDispatchCompute: [gl(4, 3), gles2(3, 1), ext("GL_ARB_compute_shader")],
    }
}
